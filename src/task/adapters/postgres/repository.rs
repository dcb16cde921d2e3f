//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDraft, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            title: draft.title().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            // Ascending id equals insertion order for a sequence-assigned key.
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let completed = task.completed();

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(tasks::completed.eq(completed))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        completed,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::from_raw(id),
        title,
        completed,
    };
    Ok(Task::from_persisted(data))
}

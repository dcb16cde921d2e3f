//! In-memory repository for task storage.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers start at 1 and ascend in insertion order, matching the
/// database adapter's sequence behaviour.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    // BTreeMap keeps iteration in ascending-id order, which is insertion
    // order because next_id only ever increments.
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::from_raw(state.next_id),
            title: draft.title().clone(),
            completed: false,
        });
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }
}

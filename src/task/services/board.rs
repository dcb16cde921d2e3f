//! Service layer for listing, adding, and completing tasks.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
}

impl AddTaskRequest {
    /// Creates a request from a submitted title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskBoardError {
    /// Returns true when the error is a missing-record lookup failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskBoardService<R>
where
    R: TaskRepository,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store cannot be read.
    pub async fn list_tasks(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Creates a new, not-yet-completed task from a submitted title.
    ///
    /// Every call inserts a fresh record; identical titles are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the title fails validation, or
    /// [`TaskBoardError::Repository`] when the insert is rejected.
    pub async fn add_task(&self, request: AddTaskRequest) -> TaskBoardResult<Task> {
        let draft = TaskDraft::new(request.title)?;
        let task = self.repository.insert(&draft).await?;
        Ok(task)
    }

    /// Marks the task with the given identifier as completed.
    ///
    /// Re-applying to an already-completed task is a no-op that still
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when no task has the identifier, or
    /// with another variant when persistence fails.
    pub async fn mark_done(&self, id: TaskId) -> TaskBoardResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.mark_done();
        self.repository.update(&task).await?;
        Ok(task)
    }
}

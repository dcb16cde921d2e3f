//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskDraft, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Absence is always explicit: lookups return `Option` and updates return
/// [`TaskRepositoryError::NotFound`]; no operation panics on a missing
/// record.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task, returning it with its assigned identifier.
    ///
    /// Identifiers ascend in insertion order, so listing by id reproduces the
    /// order tasks were created in.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the insert.
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Returns every stored task ordered by ascending identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot be
    /// read.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot be
    /// read.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Persists changes to an existing task (currently the completed flag).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

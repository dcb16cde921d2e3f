//! Task aggregate root and pre-persistence draft type.

use super::{TaskDomainError, TaskId, TaskTitle};
use serde::{Deserialize, Serialize};

/// A task pending its first insert.
///
/// Drafts carry everything a task needs except the identifier, which only the
/// persistence layer can assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: TaskTitle,
}

impl TaskDraft {
    /// Creates a draft from a raw title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title fails validation.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
        })
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }
}

/// Task aggregate root.
///
/// A task always carries a persistence-assigned identifier; use [`TaskDraft`]
/// for records that have not been stored yet. The completed flag moves from
/// `false` to `true` exactly once and never back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persistence-assigned identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted completed flag.
    pub completed: bool,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Marks the task as completed.
    ///
    /// Idempotent: marking an already-completed task leaves it unchanged.
    /// There is no inverse operation.
    pub const fn mark_done(&mut self) {
        self.completed = true;
    }
}

//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title is {0} characters long, expected at most {max}", max = super::TaskTitle::MAX_LENGTH)]
    TitleTooLong(usize),
}

//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a persisted task record.
///
/// Identifiers are assigned by the persistence layer on insert and are never
/// reused or mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a raw database value.
    #[must_use]
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated task title.
///
/// Titles are trimmed on construction, must not be empty, and are bounded to
/// the persisted column width.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Largest title length representable in the current schema.
    pub const MAX_LENGTH: usize = 255;

    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming, or [`TaskDomainError::TitleTooLong`] when it exceeds the
    /// schema-backed maximum.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TaskDomainError::TitleTooLong(length));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title, returning the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

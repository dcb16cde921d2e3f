//! Domain model for task records.
//!
//! The task domain models title-validated task creation, the one-way
//! completed transition, and reconstruction from persistence while keeping
//! all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskDraft};

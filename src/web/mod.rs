//! HTTP surface for Taskboard.
//!
//! Three routes over the task board service: list the tasks, add a task via
//! an HTML form, and mark a task as done. Rendering uses embedded `minijinja`
//! templates; failures map onto plain HTTP status responses in [`error`].

pub mod error;
pub mod handlers;
pub mod templates;

mod router;

pub use router::router;

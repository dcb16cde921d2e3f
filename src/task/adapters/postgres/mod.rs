//! `PostgreSQL` adapter for task persistence.

pub mod models;
pub mod schema;

mod repository;

pub use repository::{PostgresTaskRepository, TaskPgPool};

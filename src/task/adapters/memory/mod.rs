//! In-memory task persistence for tests and local development.

mod task;

pub use task::InMemoryTaskRepository;

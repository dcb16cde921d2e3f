//! Orchestration services for task operations.

mod board;

pub use board::{AddTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService};

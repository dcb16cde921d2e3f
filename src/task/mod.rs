//! Task tracking for Taskboard.
//!
//! This module implements the task record lifecycle: creating tasks from a
//! submitted title, listing every stored task, and marking a task as done.
//! The completed flag is one-way; nothing in this module transitions a task
//! back to pending. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

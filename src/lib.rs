//! Taskboard: a minimal task-tracking web application.
//!
//! This crate provides the core functionality for tracking tasks: listing
//! them, adding new ones, and marking existing ones as done, served over a
//! small HTTP surface backed by a relational store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, their lifecycle, and persistence
//! - [`web`]: HTTP router, handlers, and page rendering
//! - [`config`]: Environment-driven server configuration

pub mod config;
pub mod task;
pub mod web;

//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Persistence-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Completed flag.
    pub completed: bool,
}

/// Insert model for task records.
///
/// The identifier comes from the table's sequence and the completed flag from
/// its column default, so neither appears here.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
}

//! HTTP handlers for the three task board operations.

use crate::task::domain::TaskId;
use crate::task::ports::TaskRepository;
use crate::task::services::{AddTaskRequest, TaskBoardService};
use crate::web::{error::WebError, templates};
use axum::Form;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

/// Form body for the add-task operation.
#[derive(Debug, Deserialize)]
pub struct AddTaskForm {
    /// Title of the task to create.
    pub title: String,
}

/// Lists every task.
///
/// # Errors
///
/// Returns [`WebError`] when the store cannot be read or the page fails to
/// render.
pub async fn home<R>(
    State(service): State<TaskBoardService<R>>,
) -> Result<Html<String>, WebError>
where
    R: TaskRepository,
{
    let tasks = service.list_tasks().await?;
    Ok(Html(templates::render_home(&tasks)?))
}

/// Shows the add-task form.
///
/// # Errors
///
/// Returns [`WebError::Render`] when the page fails to render.
pub async fn add_task_form() -> Result<Html<String>, WebError> {
    Ok(Html(templates::render_add_task()?))
}

/// Creates a task from the submitted form and redirects to the list.
///
/// A request without a `title` field never reaches this handler; the form
/// extractor rejects it first.
///
/// # Errors
///
/// Returns [`WebError`] when title validation fails or the insert is
/// rejected.
pub async fn add_task<R>(
    State(service): State<TaskBoardService<R>>,
    Form(form): Form<AddTaskForm>,
) -> Result<Redirect, WebError>
where
    R: TaskRepository,
{
    let task = service.add_task(AddTaskRequest::new(form.title)).await?;
    tracing::info!(id = %task.id(), "task created");
    Ok(Redirect::to("/"))
}

/// Marks the addressed task as done and redirects to the list.
///
/// A non-integer path segment falls through to a not-found outcome rather
/// than matching the route.
///
/// # Errors
///
/// Returns [`WebError::NotFound`] when the id does not parse or no task has
/// it, and [`WebError::Board`] when persistence fails.
pub async fn mark_done<R>(
    State(service): State<TaskBoardService<R>>,
    task_id: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, WebError>
where
    R: TaskRepository,
{
    let Ok(Path(raw_id)) = task_id else {
        return Err(WebError::NotFound);
    };
    service.mark_done(TaskId::from_raw(raw_id)).await?;
    Ok(Redirect::to("/"))
}

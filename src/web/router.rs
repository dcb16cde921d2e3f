//! Route table for the task board.

use crate::task::ports::TaskRepository;
use crate::task::services::TaskBoardService;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::handlers;

/// Builds the application router over the given service.
///
/// Routes:
///
/// - `GET /` lists tasks
/// - `GET /add/` shows the create form, `POST /add/` creates a task
/// - `GET|POST /done/:task_id/` marks a task as done
///
/// Unknown paths fall through to axum's default not-found response.
pub fn router<R>(service: TaskBoardService<R>) -> Router
where
    R: TaskRepository + Clone + 'static,
{
    Router::new()
        .route("/", get(handlers::home::<R>))
        .route(
            "/add/",
            get(handlers::add_task_form).post(handlers::add_task::<R>),
        )
        .route(
            "/done/:task_id/",
            get(handlers::mark_done::<R>).post(handlers::mark_done::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

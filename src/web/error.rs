//! Error-to-response mapping for the HTTP surface.

use crate::task::services::TaskBoardError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// The request addressed a resource that does not exist.
    #[error("not found")]
    NotFound,

    /// A task board operation failed.
    #[error(transparent)]
    Board(#[from] TaskBoardError),

    /// Page rendering failed.
    #[error(transparent)]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => not_found(),
            Self::Board(err) if err.is_not_found() => not_found(),
            Self::Board(TaskBoardError::Domain(err)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
            }
            Self::Board(err) => internal_error(&err),
            Self::Render(err) => internal_error(&err),
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

fn internal_error(err: &dyn std::error::Error) -> Response {
    tracing::error!(error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}

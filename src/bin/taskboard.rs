//! Serves the task board over HTTP.
//!
//! Reads `DATABASE_URL` (required) and `TASKBOARD_ADDR` (optional, defaults
//! to `127.0.0.1:8000`) from the environment or a `.env` file, connects a
//! `PostgreSQL` pool, and serves the three task routes until the process is
//! stopped.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use taskboard::config::ServerConfig;
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use taskboard::task::services::TaskBoardService;
use taskboard::web;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let app = web::router(TaskBoardService::new(repository));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "taskboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}

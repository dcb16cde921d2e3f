//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable overriding the bind address.
pub const BIND_ADDR_VAR: &str = "TASKBOARD_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Errors raised while reading server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The database connection string is missing.
    #[error("{DATABASE_URL_VAR} must be set")]
    MissingDatabaseUrl,

    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address '{value}'")]
    InvalidBindAddr {
        /// The rejected value.
        value: String,
        /// Parse failure reported by the standard library.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `TASKBOARD_ADDR` defaults to
    /// `127.0.0.1:8000`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is unset or the bind
    /// address is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingDatabaseUrl)?;
        let raw_addr =
            env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;
        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}

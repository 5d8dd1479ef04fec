use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Turn a unique-constraint violation into `Conflict`, using the
    /// violated constraint text to pick the message.
    pub fn from_write(err: sqlx::Error, conflict_message: impl FnOnce(&str) -> String) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return DatabaseError::Conflict(conflict_message(db_err.message()));
            }
        }
        DatabaseError::Sqlx(err)
    }
}

const MEMORY_URL: &str = "sqlite::memory:";

/// Open the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    if config.url.trim().is_empty() {
        return Err(DatabaseError::ConfigMissing("DATABASE_URL"));
    }
    if config.url.contains(":memory:") {
        return connect_in_memory().await;
    }

    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect_with(options)
        .await?;

    info!("Created database pool for: {}", config.url);
    Ok(pool)
}

/// A private in-memory database. Every SQLite connection to `:memory:` is its
/// own database, so the pool is pinned to one connection that never expires.
pub async fn connect_in_memory() -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(MEMORY_URL)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Close the pool on shutdown
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    info!("Closed database pool");
}

//! SQLite connection pool management.
//!
//! The application is strictly sequential: one interactive action at a
//! time, each store call awaited to completion before the next. The pool
//! therefore holds exactly one connection, opened at startup and kept for
//! the process lifetime.
//!
//! # Example
//!
//! ```no_run
//! use tarefa_core::db::pool::{create_pool, StoreConfig};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let pool = create_pool(&StoreConfig::file("task_manager.db")).await?;
//! # Ok(())
//! # }
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the SQLite store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the database file. Ignored when `in_memory` is set.
    pub path: PathBuf,

    /// Use a transient in-memory database instead of a file.
    ///
    /// The database lives exactly as long as the single pooled
    /// connection, so the pool never recycles it.
    pub in_memory: bool,

    /// How long SQLite waits on a locked database before failing (seconds).
    pub busy_timeout_seconds: u64,
}

impl StoreConfig {
    /// File-backed store at `path`, created on first open.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            in_memory: false,
            busy_timeout_seconds: 5,
        }
    }

    /// Transient in-memory store, used by the test suites.
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            in_memory: true,
            busy_timeout_seconds: 5,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::file("task_manager.db")
    }
}

/// Creates the SQLite connection pool and verifies connectivity.
///
/// Foreign keys are enforced so every task row keeps a valid owner, and
/// the database file is created on first start.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or the health
/// check fails. Callers treat this as fatal: the application has no
/// recovery path without a working store.
pub async fn create_pool(config: &StoreConfig) -> Result<SqlitePool, sqlx::Error> {
    info!(
        path = %config.path.display(),
        in_memory = config.in_memory,
        "Opening task store"
    );

    let mut options = SqliteConnectOptions::new()
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(config.busy_timeout_seconds));

    if config.in_memory {
        options = options.filename(":memory:");
    } else {
        options = options.filename(&config.path).create_if_missing(true);
    }

    // One connection for the process lifetime; never recycled, otherwise
    // an in-memory database would vanish mid-run.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    health_check(&pool).await?;

    info!("Task store opened");
    Ok(pool)
}

/// Performs a health check on the database connection.
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Performing store health check");

    let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if result.0 == 1 {
        debug!("Store health check passed");
        Ok(())
    } else {
        Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ))
    }
}

/// Closes the pool, releasing the store's single connection.
///
/// Called on application exit.
pub async fn close_pool(pool: SqlitePool) {
    info!("Closing task store");
    pool.close().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_file() {
        let config = StoreConfig::default();
        assert_eq!(config.path, PathBuf::from("task_manager.db"));
        assert!(!config.in_memory);
        assert_eq!(config.busy_timeout_seconds, 5);
    }

    #[test]
    fn in_memory_config() {
        let config = StoreConfig::in_memory();
        assert!(config.in_memory);
    }

    #[tokio::test]
    async fn health_check_passes_on_fresh_store() {
        let pool = create_pool(&StoreConfig::in_memory())
            .await
            .expect("failed to open in-memory store");
        health_check(&pool).await.expect("health check failed");
        close_pool(pool).await;
    }
}

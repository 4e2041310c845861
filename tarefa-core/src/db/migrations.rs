//! Schema migration runner.
//!
//! Migrations live in the `migrations/` directory of this crate and are
//! applied with sqlx's migrator, which tracks applied versions in the
//! database itself. Running them on a schema that is already current is a
//! no-op, so the store can run them unconditionally on every start.

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Runs all pending schema migrations.
///
/// Must complete before any other store operation. Idempotent: already
/// applied migrations are skipped.
///
/// # Errors
///
/// Returns an error if a migration fails to execute; callers treat this
/// as fatal at startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running schema migrations");

    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => {
            info!("Schema is up to date");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

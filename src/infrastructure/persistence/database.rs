//! SQLite pool construction and schema initialization.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::{Config, ServiceKind};

/// Opens a connection pool for the configured database.
///
/// The database file and its parent directory are created if missing.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the directory cannot be created,
/// or the first connection fails.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{}'", config.database_url))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(config.db_busy_timeout));

    if !config.is_in_memory() {
        ensure_parent_dir(options.get_filename())?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }
    Ok(())
}

/// Ensures the service's table exists.
///
/// The migration SQL is `CREATE TABLE IF NOT EXISTS`, so this is safe to run
/// on every startup, including against a store populated by other tooling.
/// Each service ignores the other's migration history so both may share a file.
pub async fn init_schema(pool: &SqlitePool, service: ServiceKind) -> Result<(), MigrateError> {
    let mut migrator: Migrator = match service {
        ServiceKind::Shortener => sqlx::migrate!("./migrations/shortener"),
        ServiceKind::Todo => sqlx::migrate!("./migrations/todo"),
    };
    migrator.set_ignore_missing(true);

    migrator.run(pool).await?;
    tracing::debug!(service = %service, "Schema initialized");
    Ok(())
}

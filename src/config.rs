//! Service configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Both services read the same variables; defaults differ per service.
//!
//! ## Database
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/shorturl.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `DATA_DIR` (default: `data`)
//! and the service's file name (`shorturl.db` or `todo.db`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000` shortener, `0.0.0.0:8001` todo)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`,
//!   `DB_MAX_LIFETIME`, `DB_BUSY_TIMEOUT` - pool settings

use anyhow::{Context, Result};
use std::env;
use std::fmt;

/// Which of the two services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ServiceKind {
    Shortener,
    Todo,
}

impl ServiceKind {
    /// Database file name used when `DATABASE_URL` is not provided.
    pub fn default_db_file(self) -> &'static str {
        match self {
            ServiceKind::Shortener => "shorturl.db",
            ServiceKind::Todo => "todo.db",
        }
    }

    pub fn default_listen_addr(self) -> &'static str {
        match self {
            ServiceKind::Shortener => "0.0.0.0:8000",
            ServiceKind::Todo => "0.0.0.0:8001",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Shortener => f.write_str("shortener"),
            ServiceKind::Todo => f.write_str("todo"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceKind,
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
    /// How long a statement waits on a locked database in seconds
    /// (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration for `service` from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env(service: ServiceKind) -> Result<Self> {
        let database_url = Self::load_database_url(service);

        let listen_addr =
            env::var("LISTEN").unwrap_or_else(|_| service.default_listen_addr().to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            service,
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", 30)?,
            db_idle_timeout: parse_var("DB_IDLE_TIMEOUT", 600)?,
            db_max_lifetime: parse_var("DB_MAX_LIFETIME", 1800)?,
            db_busy_timeout: parse_var("DB_BUSY_TIMEOUT", 5)?,
        })
    }

    /// Loads the database URL with fallback to `DATA_DIR`.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://{DATA_DIR}/{service file}`
    fn load_database_url(service: ServiceKind) -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        format!(
            "sqlite://{}/{}",
            data_dir.trim_end_matches('/'),
            service.default_db_file()
        )
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - a pool setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether the database lives in memory only.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service: {}", self.service);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Pool size: {}", self.db_max_connections);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(service: ServiceKind) -> Result<Config> {
    let config = Config::from_env(service)?;
    config.validate()?;
    Ok(config)
}

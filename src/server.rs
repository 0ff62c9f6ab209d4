//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, the schema step and the Axum server lifecycle.

use crate::config::{Config, ServiceKind};
use crate::infrastructure::persistence::{connect, init_schema};
use crate::routes::{shortener_app, todo_app};
use crate::state::{ShortenerState, TodoState};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the configured service until Ctrl-C or SIGTERM.
///
/// Initializes:
/// - SQLite connection pool
/// - The service's table (idempotent)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Schema initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;
    tracing::info!("Connected to database");

    init_schema(&pool, config.service)
        .await
        .context("Failed to initialize schema")?;
    tracing::info!("Schema ready");

    let app = match config.service {
        ServiceKind::Shortener => shortener_app(ShortenerState::new(pool.clone())),
        ServiceKind::Todo => todo_app(TodoState::new(pool.clone())),
    };

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(service = %config.service, "Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

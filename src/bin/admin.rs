//! CLI administration tool for the shortener and to-do databases.
//!
//! Works directly against a service's SQLite database, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check the database connection and row count
//! cargo run --bin admin -- --service shortener db check
//!
//! # Create the service's table if it does not exist
//! cargo run --bin admin -- --service todo db init
//!
//! # Show the SQLite version
//! cargo run --bin admin -- --service todo db info
//!
//! # Print stored records
//! cargo run --bin admin -- --service shortener urls
//! cargo run --bin admin -- --service todo items
//! ```
//!
//! # Environment Variables
//!
//! Same as the services: `DATABASE_URL` or `DATA_DIR` (see `url_todo::config`).

use url_todo::application::services::{ItemService, UrlService};
use url_todo::config::{self, ServiceKind};
use url_todo::infrastructure::persistence::{
    SqliteItemRepository, SqliteUrlRepository, connect, init_schema,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing the service databases.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which service's database to operate on
    #[arg(short, long, value_enum)]
    service: ServiceKind,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// List short URL mappings (shortener only)
    Urls,

    /// List to-do items (todo only)
    Items,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and count rows
    Check,

    /// Create the service's table if missing
    Init,

    /// Show the SQLite library version
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(cli.service)?;
    let pool = connect(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, cli.service, &pool).await?,
        Commands::Urls => list_urls(cli.service, &pool).await?,
        Commands::Items => list_items(cli.service, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: ServiceKind, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let count = count_rows(service, pool).await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Rows: {}", count.to_string().bright_green().bold());
        }
        DbAction::Init => {
            init_schema(pool, service)
                .await
                .context("Failed to initialize schema")?;

            println!(
                "{}",
                format!("Schema for {service} is ready").green().bold()
            );
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

async fn count_rows(service: ServiceKind, pool: &SqlitePool) -> Result<i64> {
    let count = match service {
        ServiceKind::Shortener => url_service(pool).count().await,
        ServiceKind::Todo => item_service(pool).count().await,
    };

    count.map_err(|e| anyhow::anyhow!("Database error: {}", e))
}

/// Prints every stored short URL mapping.
async fn list_urls(service: ServiceKind, pool: &SqlitePool) -> Result<()> {
    if service != ServiceKind::Shortener {
        anyhow::bail!("'urls' requires --service shortener");
    }

    let urls = url_service(pool)
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("{}", "Short URLs".bright_blue().bold());
    println!();

    if urls.is_empty() {
        println!("  {}", "No short URLs found".yellow());
        return Ok(());
    }

    for url in &urls {
        println!("  {:<8} {}", url.short_id.cyan(), url.full_url);
    }

    println!();
    println!("  Total: {}", urls.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints every stored to-do item.
async fn list_items(service: ServiceKind, pool: &SqlitePool) -> Result<()> {
    if service != ServiceKind::Todo {
        anyhow::bail!("'items' requires --service todo");
    }

    let items = item_service(pool)
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("{}", "To-do items".bright_blue().bold());
    println!();

    if items.is_empty() {
        println!("  {}", "No items found".yellow());
        return Ok(());
    }

    for item in &items {
        let status = if item.completed {
            "DONE".green()
        } else {
            "OPEN".yellow()
        };

        println!(
            "  {:<5} {} {}  {}",
            item.id.to_string().bright_black(),
            status,
            item.title.cyan(),
            item.description.as_deref().unwrap_or("").bright_black()
        );
    }

    println!();
    println!("  Total: {}", items.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn url_service(pool: &SqlitePool) -> UrlService<SqliteUrlRepository> {
    UrlService::new(Arc::new(SqliteUrlRepository::new(pool.clone())))
}

fn item_service(pool: &SqlitePool) -> ItemService<SqliteItemRepository> {
    ItemService::new(Arc::new(SqliteItemRepository::new(pool.clone())))
}

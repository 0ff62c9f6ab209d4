use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url_todo::config::{Config, ServiceKind};
use url_todo::server;

/// Runs one of the two services.
#[derive(Parser)]
#[command(name = "url-todo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    service: ServiceCommand,
}

#[derive(Subcommand)]
enum ServiceCommand {
    /// Run the URL shortener service
    Shortener(ServeArgs),
    /// Run the to-do list service
    Todo(ServeArgs),
}

/// Overrides for values otherwise read from the environment.
#[derive(Args)]
struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:8000
    #[arg(long)]
    listen: Option<String>,

    /// SQLite database URL, e.g. sqlite://data/todo.db
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (service, args) = match cli.service {
        ServiceCommand::Shortener(args) => (ServiceKind::Shortener, args),
        ServiceCommand::Todo(args) => (ServiceKind::Todo, args),
    };

    let mut config = Config::from_env(service)?;
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}

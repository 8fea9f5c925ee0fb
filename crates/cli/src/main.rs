use anyhow::Result;
use clap::{Parser, Subcommand};
use stepform_core::AppConfig;
use stepform_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "stepform")]
#[command(about = "Backend for multi-step form sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Verify database connectivity and create tables if missing
    Migrate,
    /// Print a form session and its answers as JSON
    Show { session_id: String },
}

/// Connect to the configured database. Logs the URL with its password masked.
pub(crate) async fn connect_storage(config: &AppConfig) -> Result<StorageBackend> {
    tracing::info!("Connecting to database: {}", config.redacted_database_url());
    let storage = StorageBackend::connect(&config.database_url, config.pool).await?;
    storage.ping().await?;
    tracing::info!(backend = storage.kind(), "Database connection successful");
    Ok(storage)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            commands::serve::run(config).await
        },
        Commands::Migrate => commands::migrate::run(&config).await,
        Commands::Show { session_id } => commands::show::run(&config, &session_id).await,
    }
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use lolomo::catalog::{Catalog, InMemoryCatalog};
use lolomo::config::{Config, DEFAULT_CONFIG_PATH};
use lolomo::lolomo::Lolomo;
use lolomo::{observability, server};

#[derive(Parser)]
#[command(name = "lolomo")]
#[command(about = "GraphQL API serving curated title lists with generated artwork")]
#[command(version = "0.1.0")]
struct Cli {
    /// Port to run the server on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Do not install the Prometheus recorder
    #[arg(long)]
    no_metrics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    observability::init_logging();

    let config = Config::load_from(&cli.config)?;
    let port = cli.port.unwrap_or(config.server.port);

    if !cli.no_metrics {
        if let Err(e) = observability::init() {
            warn!("Failed to initialize metrics: {}", e);
        }
    }

    let catalog: Arc<dyn Catalog> = Arc::new(InMemoryCatalog::builtin());
    let lolomo = Arc::new(Lolomo::from_config(catalog, &config.artwork));

    info!(
        port,
        workers = config.artwork.workers,
        delay_ms = config.artwork.delay_ms,
        timeout_ms = ?config.artwork.timeout_ms,
        "Starting lolomo GraphQL server"
    );

    server::start_server(lolomo, port).await?;

    Ok(())
}

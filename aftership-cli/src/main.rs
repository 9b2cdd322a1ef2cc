//! AfterShip CLI
//!
//! Query the AfterShip tracking API from the command line.

mod commands;
mod config;

use std::path::PathBuf;

use aftership_sdk::AfterShip;
use clap::Parser;
use commands::Command;
use config::{ConfigLoader, Overrides};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// AfterShip - shipment tracking from the command line
#[derive(Parser, Debug)]
#[command(name = "aftership")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "AFTERSHIP_CONFIG")]
    config: Option<PathBuf>,

    /// AfterShip API key
    #[arg(long, env = "AFTERSHIP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the API endpoint (e.g., http://127.0.0.1:8080/v4)
    #[arg(long, env = "AFTERSHIP_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    tracing::debug!("Starting aftership v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let loader = ConfigLoader::new(args.config.as_ref(), args.overrides());
    let client_config = loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::debug!(endpoint = %client_config.endpoint(), "Configuration loaded");

    let client = AfterShip::from_config(&client_config)?;

    args.command.run(&client).await.map_err(|e| {
        tracing::error!("{:#}", e);
        e
    })
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout stays clean JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

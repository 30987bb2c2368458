//! # EntregaBot: delivery-support chatbot server
//!
//! Loads the static knowledge base, fits (or loads) the retrieval index,
//! resolves the generation-provider chain from the environment, and serves
//! the HTTP API.
//!
//! Usage:
//!   entregabot                         # serve with defaults (data/ next to cwd)
//!   entregabot --config ./config.toml  # explicit config file
//!   entregabot --port 8080             # override the listen port

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use entregabot_core::config::EntregaConfig;

#[derive(Parser)]
#[command(name = "entregabot", version, about = "Chatbot de suporte a entregas")]
struct Cli {
    /// Path to config.toml (default: ~/.entregabot/config.toml)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the data directory
    #[arg(long)]
    data_dir: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    let mut config = match &cli.config {
        Some(path) => EntregaConfig::load_from(path)?,
        None => EntregaConfig::load()?,
    };
    if let Some(host) = cli.host {
        config.gateway.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }

    entregabot_gateway::start(config).await
}

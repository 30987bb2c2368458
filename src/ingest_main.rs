//! # EntregaBot Ingest: offline index builder
//!
//! Fits the TF-IDF space over the FAQ corpus and writes the serialized
//! index snapshot the server prefers at startup.
//!
//! Usage:
//!   entregabot-ingest                      # data/kb.json → data/kb_index.json
//!   entregabot-ingest --data-dir /srv/kb   # custom data directory

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use entregabot_core::config::DataConfig;
use entregabot_retrieval::{IndexSnapshot, KnowledgeIndex};

#[derive(Parser)]
#[command(
    name = "entregabot-ingest",
    version,
    about = "Gera o snapshot do índice TF-IDF a partir do KB"
)]
struct Cli {
    /// Directory holding kb.json; the snapshot is written next to it
    #[arg(long, default_value = "data")]
    data_dir: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data = DataConfig {
        dir: cli.data_dir,
        ..DataConfig::default()
    };

    let docs = entregabot_kb::load_corpus(&data.kb_path())?;
    tracing::info!("Fitting index over {} documents", docs.len());
    let index = KnowledgeIndex::fit(docs);

    let out = data.index_path();
    IndexSnapshot::from_index(&index).save(&out)?;
    tracing::info!("Index snapshot written to {}", out.display());
    Ok(())
}

//! Demo: rerank a JSON snapshot for a sector selection and print the result.
//!
//! Usage: `rerank_demo [SNAPSHOT_PATH] [SECTORS]`
//! - SNAPSHOT_PATH falls back to $RERANK_SNAPSHOT_PATH, then demos/snapshot.json
//! - SECTORS is comma-separated ("energy,mining"); falls back to $RERANK_SECTORS;
//!   empty means no filtering
//! - RERANK_METRICS=1 appends the Prometheus exposition

use anyhow::Context;
use std::path::PathBuf;

use sector_rerank::logging::init_tracing;
use sector_rerank::metrics::Metrics;
use sector_rerank::snapshot::{Snapshot, DEFAULT_SNAPSHOT_PATH, ENV_SNAPSHOT_PATH};
use sector_rerank::{SectorSelection, Taxonomy};

const ENV_SECTORS: &str = "RERANK_SECTORS";
const ENV_METRICS: &str = "RERANK_METRICS";

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let metrics = if std::env::var(ENV_METRICS).ok().as_deref() == Some("1") {
        Some(Metrics::init().context("installing prometheus recorder")?)
    } else {
        None
    };

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .or_else(|| std::env::var(ENV_SNAPSHOT_PATH).ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH));
    let selection = args
        .next()
        .or_else(|| std::env::var(ENV_SECTORS).ok())
        .map(|s| SectorSelection::parse(&s))
        .unwrap_or_default();

    let taxonomy = Taxonomy::load_default()?;
    let snapshot = Snapshot::load_from(&snapshot_path)?;

    let ranking = snapshot
        .rerank(&selection, &taxonomy)
        .context("sector selection does not match the taxonomy")?;

    println!("{}", serde_json::to_string_pretty(&ranking)?);

    if let Some(m) = metrics {
        println!("{}", m.render());
    }
    Ok(())
}

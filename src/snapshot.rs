//! Snapshot of dashboard inputs (entities + per-entity articles) as JSON.
//!
//! Shape:
//! ```json
//! {
//!   "entities": [{"id": "de", "name": "Germany", "baseline_score": 62.5}],
//!   "articles": {"de": [{"id": "a1", "topics": ["Energy"], "sentiment_label": "positive",
//!                        "sentiment_score": 71.0, "published_at": "2025-03-01T08:00:00Z"}]}
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::article::Entity;
use crate::error::ConfigurationError;
use crate::rerank::{rerank_entities, ArticlePool, Ranking};
use crate::selection::SectorSelection;
use crate::taxonomy::Taxonomy;

pub const ENV_SNAPSHOT_PATH: &str = "RERANK_SNAPSHOT_PATH";
pub const DEFAULT_SNAPSHOT_PATH: &str = "demos/snapshot.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub articles: ArticlePool,
}

impl Snapshot {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing snapshot JSON")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading snapshot from {}", path.display()))?;
        let snap = Self::from_json_str(&content)
            .with_context(|| format!("snapshot at {}", path.display()))?;
        info!(
            path = %path.display(),
            entities = snap.entities.len(),
            articles = snap.article_count(),
            "loaded snapshot"
        );
        Ok(snap)
    }

    pub fn article_count(&self) -> usize {
        self.articles.values().map(Vec::len).sum()
    }

    pub fn rerank(
        &self,
        selection: &SectorSelection,
        taxonomy: &Taxonomy,
    ) -> Result<Ranking, ConfigurationError> {
        rerank_entities(&self.entities, &self.articles, selection, taxonomy)
    }
}

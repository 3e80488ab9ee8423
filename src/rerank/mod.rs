// src/rerank/mod.rs
//! Rerank pipeline entry: blend every entity against its articles, then rank.
//!
//! Pure: no I/O, no retained state. Each call returns fresh owned values, so a
//! caller that recomputes on every selection change can simply drop the old
//! `Ranking`.

pub mod blend;
pub mod matcher;
pub mod rank;
pub mod scorer;

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::article::{Article, Entity};
use crate::error::ConfigurationError;
use crate::selection::SectorSelection;
use crate::taxonomy::Taxonomy;

// Re-export convenient types.
pub use crate::rerank::blend::{
    blend, resolve_selection, ScoreBasis, ScoringResult, SectorBreakdown,
};
pub use crate::rerank::matcher::{filter_by_sector, matches, KeywordMatcher};
pub use crate::rerank::rank::{rank, RankedEntity};
pub use crate::rerank::scorer::score_sector;

/// Articles per entity id.
pub type ArticlePool = HashMap<String, Vec<Article>>;

/// Output of one full recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub selection: SectorSelection,
    /// One result per entity, in input order.
    pub results: Vec<ScoringResult>,
    /// Entities by adjusted score, descending.
    pub ranked: Vec<RankedEntity>,
}

impl Ranking {
    pub fn result_for(&self, entity_id: &str) -> Option<&ScoringResult> {
        self.results.iter().find(|r| r.entity_id == entity_id)
    }
}

/// Blend all entities and rank them.
///
/// The selection is validated up front: an unknown sector id fails the whole
/// call before any entity is scored. Entities missing from `pool` are scored
/// against an empty article set.
pub fn rerank_entities(
    entities: &[Entity],
    pool: &ArticlePool,
    selection: &SectorSelection,
    taxonomy: &Taxonomy,
) -> Result<Ranking, ConfigurationError> {
    resolve_selection(selection, taxonomy)?;

    let results = entities
        .iter()
        .map(|e| {
            let articles = pool.get(&e.id).map(Vec::as_slice).unwrap_or(&[]);
            blend(e, articles, selection, taxonomy)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ranked = rank(entities, &results);
    crate::metrics::record_ranked(ranked.len());

    debug!(
        entities = entities.len(),
        sectors = selection.len(),
        "rerank complete"
    );

    Ok(Ranking {
        selection: selection.clone(),
        results,
        ranked,
    })
}

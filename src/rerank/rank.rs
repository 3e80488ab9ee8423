// src/rerank/rank.rs
//! Ranking: entities ordered by adjusted score, highest first.
//!
//! Ties keep input order (stable sort, no secondary key). An entity without a
//! result ranks by its own baseline (midpoint if unknown); nobody is dropped.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::article::{Entity, DEFAULT_BASELINE};
use crate::rerank::blend::ScoringResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntity {
    /// 1-based.
    pub position: usize,
    pub entity: Entity,
    pub adjusted_score: f64,
}

pub fn rank(entities: &[Entity], results: &[ScoringResult]) -> Vec<RankedEntity> {
    // First result per entity id wins.
    let mut by_id: HashMap<&str, f64> = HashMap::with_capacity(results.len());
    for r in results {
        by_id.entry(r.entity_id.as_str()).or_insert(r.adjusted_score);
    }

    let mut scored: Vec<(&Entity, f64)> = entities
        .iter()
        .map(|e| {
            let s = by_id
                .get(e.id.as_str())
                .copied()
                .unwrap_or_else(|| e.effective_baseline());
            (e, if s.is_nan() { DEFAULT_BASELINE } else { s })
        })
        .collect();

    // `sort_by` is stable; NaN was replaced above so partial_cmp is total here.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (e, s))| RankedEntity {
            position: i + 1,
            entity: e.clone(),
            adjusted_score: s,
        })
        .collect()
}

// src/rerank/blend.rs
//! Score blending: baseline + sector evidence → adjusted score, mix and trend.
//!
//! Order:
//! 1) Empty selection → baseline passes through; mix/trend over all articles.
//! 2) Resolve every selected sector (unknown id → `ConfigurationError`), filter
//!    and score each; union matched articles, dedup by article id.
//! 3) No sector produced a score → same as (1), but flagged `NoSectorMatches`.
//! 4) adjusted = 0.5 * baseline + 0.5 * mean(defined sector scores);
//!    a missing baseline is replaced by the midpoint first.
//! 5) Mix/trend over the deduplicated union.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::article::{Article, Entity};
use crate::error::ConfigurationError;
use crate::metrics;
use crate::rerank::matcher::filter_by_sector;
use crate::rerank::scorer::score_sector;
use crate::selection::SectorSelection;
use crate::sentiment::{SentimentMix, Trend};
use crate::taxonomy::Taxonomy;

pub const BASELINE_WEIGHT: f64 = 0.5;
pub const SECTOR_WEIGHT: f64 = 0.5;

/// Why the adjusted score has the value it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBasis {
    /// Selection was empty; baseline passed through.
    NoSelection,
    /// Sectors were selected but none matched any article; baseline passed through.
    NoSectorMatches,
    /// Baseline blended with sector evidence.
    Blended,
}

impl ScoreBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBasis::NoSelection => "no_selection",
            ScoreBasis::NoSectorMatches => "no_sector_matches",
            ScoreBasis::Blended => "blended",
        }
    }

    /// True when the score is the (possibly defaulted) baseline, unchanged.
    pub fn is_passthrough(&self) -> bool {
        !matches!(self, ScoreBasis::Blended)
    }
}

/// Per-sector evidence, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBreakdown {
    pub sector_id: String,
    pub matched_articles: usize,
    /// `None` when the sector matched nothing.
    pub score: Option<f64>,
}

/// Fresh output of one blend; owns all its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub entity_id: String,
    pub adjusted_score: f64,
    /// Distinct articles matched by at least one selected sector
    /// (0 when the baseline passed through).
    pub matched_article_count: usize,
    pub sentiment_mix: SentimentMix,
    pub trend: Trend,
    pub basis: ScoreBasis,
    /// The midpoint stood in for a missing baseline.
    pub baseline_defaulted: bool,
    /// Mean of the defined sector scores (only when blended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_aggregate: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sectors: Vec<SectorBreakdown>,
}

/// Look up every selected sector's keywords, failing on the first unknown id.
pub fn resolve_selection<'t>(
    selection: &SectorSelection,
    taxonomy: &'t Taxonomy,
) -> Result<Vec<(String, &'t [String])>, ConfigurationError> {
    selection
        .iter()
        .map(|id| {
            taxonomy.keywords(id).map(|kws| (id.to_string(), kws)).map_err(|e| {
                metrics::record_config_error();
                warn!(sector = %id, error = %e, "selection references unknown sector");
                e
            })
        })
        .collect()
}

pub fn blend(
    entity: &Entity,
    articles: &[Article],
    selection: &SectorSelection,
    taxonomy: &Taxonomy,
) -> Result<ScoringResult, ConfigurationError> {
    let result = blend_inner(entity, articles, selection, taxonomy)?;
    metrics::record_blend(result.basis);
    Ok(result)
}

fn blend_inner(
    entity: &Entity,
    articles: &[Article],
    selection: &SectorSelection,
    taxonomy: &Taxonomy,
) -> Result<ScoringResult, ConfigurationError> {
    // (1) no filter
    if selection.is_empty() {
        return Ok(passthrough(entity, articles, ScoreBasis::NoSelection, Vec::new()));
    }

    // (2) per-sector evidence
    let sectors = resolve_selection(selection, taxonomy)?;

    let mut breakdown = Vec::with_capacity(sectors.len());
    let mut defined: Vec<f64> = Vec::with_capacity(sectors.len());
    let mut seen: HashSet<&str> = HashSet::new();
    let mut union: Vec<&Article> = Vec::new();

    for (sector_id, keywords) in sectors {
        let matched = filter_by_sector(articles, keywords);
        let score = score_sector(&matched);
        if let Some(s) = score {
            defined.push(s);
        }
        breakdown.push(SectorBreakdown {
            sector_id,
            matched_articles: matched.len(),
            score,
        });
        for a in matched {
            if seen.insert(a.id.as_str()) {
                union.push(a);
            }
        }
    }

    // (3) nothing matched anywhere
    if defined.is_empty() {
        debug!(
            entity = %entity.id,
            sectors = selection.len(),
            articles = articles.len(),
            "no sector matches; keeping baseline"
        );
        return Ok(passthrough(
            entity,
            articles,
            ScoreBasis::NoSectorMatches,
            breakdown,
        ));
    }

    // (4) blend
    let aggregate = defined.iter().sum::<f64>() / defined.len() as f64;
    let baseline = entity.effective_baseline();
    let adjusted = BASELINE_WEIGHT * baseline + SECTOR_WEIGHT * aggregate;

    // (5) mix over the deduplicated union
    let mix = SentimentMix::from_articles(union.iter().copied());

    debug!(
        entity = %entity.id,
        baseline,
        aggregate,
        adjusted,
        matched = union.len(),
        "blended sector score"
    );

    Ok(ScoringResult {
        entity_id: entity.id.clone(),
        adjusted_score: adjusted,
        matched_article_count: union.len(),
        sentiment_mix: mix,
        trend: mix.trend(),
        basis: ScoreBasis::Blended,
        baseline_defaulted: entity.known_baseline().is_none(),
        sector_aggregate: Some(aggregate),
        sectors: breakdown,
    })
}

/// Baseline unchanged, mix/trend over the full pool.
fn passthrough(
    entity: &Entity,
    articles: &[Article],
    basis: ScoreBasis,
    sectors: Vec<SectorBreakdown>,
) -> ScoringResult {
    let mix = SentimentMix::from_articles(articles);
    ScoringResult {
        entity_id: entity.id.clone(),
        adjusted_score: entity.effective_baseline(),
        matched_article_count: 0,
        sentiment_mix: mix,
        trend: mix.trend(),
        basis,
        baseline_defaulted: entity.known_baseline().is_none(),
        sector_aggregate: None,
        sectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::SentimentLabel;
    use crate::taxonomy::SectorDefinition;
    use chrono::Utc;

    fn taxonomy() -> Taxonomy {
        Taxonomy::new(vec![
            SectorDefinition::new("energy", ["Energy"]),
            SectorDefinition::new("healthcare", ["Healthcare"]),
            SectorDefinition::new("mining", ["Mining", "Copper"]),
        ])
        .unwrap()
    }

    fn art(id: &str, topics: &[&str], label: SentimentLabel, score: f64) -> Article {
        Article::new(id, topics.iter().copied(), label, score, Utc::now())
    }

    fn energy_pool() -> Vec<Article> {
        vec![
            art("a1", &["Energy"], SentimentLabel::Positive, 80.0),
            art("a2", &["Energy"], SentimentLabel::Positive, 60.0),
            art("a3", &["Energy"], SentimentLabel::Neutral, 0.0),
        ]
    }

    #[test]
    fn energy_scenario() {
        let e = Entity::new("de", "Germany", Some(60.0));
        let r = blend(&e, &energy_pool(), &SectorSelection::parse("energy"), &taxonomy()).unwrap();
        assert!((r.adjusted_score - 55.0).abs() < 1e-9, "got {}", r.adjusted_score);
        assert_eq!(r.basis, ScoreBasis::Blended);
        assert_eq!(r.matched_article_count, 3);
        assert_eq!(
            r.sentiment_mix,
            SentimentMix {
                positive: 2,
                neutral: 1,
                negative: 0
            }
        );
        assert_eq!(r.trend, Trend::Upward);
        assert_eq!(r.sector_aggregate, Some(50.0));
        assert_eq!(r.sectors.len(), 1);
        assert_eq!(r.sectors[0].score, Some(50.0));
    }

    #[test]
    fn empty_selection_passes_baseline_exactly() {
        let e = Entity::new("de", "Germany", Some(61.37));
        let r = blend(&e, &energy_pool(), &SectorSelection::empty(), &taxonomy()).unwrap();
        assert_eq!(r.adjusted_score, 61.37);
        assert_eq!(r.basis, ScoreBasis::NoSelection);
        assert_eq!(r.sentiment_mix.total(), 3);
        assert!(r.sectors.is_empty());
    }

    #[test]
    fn total_miss_falls_back_to_full_pool() {
        let mut pool = energy_pool();
        pool.push(art("a4", &["Tourism"], SentimentLabel::Negative, 10.0));
        let e = Entity::new("de", "Germany", Some(60.0));
        let r = blend(&e, &pool, &SectorSelection::parse("healthcare"), &taxonomy()).unwrap();
        assert_eq!(r.adjusted_score, 60.0);
        assert_eq!(r.basis, ScoreBasis::NoSectorMatches);
        assert_eq!(r.sentiment_mix.total(), 4);
        assert_eq!(r.trend, Trend::Upward);
        assert_eq!(r.sectors[0].score, None);
        assert_eq!(r.matched_article_count, 0);
    }

    #[test]
    fn unknown_sector_is_an_error_even_with_valid_siblings() {
        let e = Entity::new("de", "Germany", Some(60.0));
        let err = blend(
            &e,
            &energy_pool(),
            &SectorSelection::parse("energy, spacefaring"),
            &taxonomy(),
        )
        .unwrap_err();
        assert_eq!(err.sector_id(), "spacefaring");
    }

    #[test]
    fn missing_baseline_uses_midpoint() {
        let e = Entity::new("xx", "Nowhere", None);
        let r = blend(&e, &energy_pool(), &SectorSelection::parse("energy"), &taxonomy()).unwrap();
        // 0.5 * 50 + 0.5 * 50
        assert!((r.adjusted_score - 50.0).abs() < 1e-9);
        assert!(r.baseline_defaulted);

        let r = blend(&e, &energy_pool(), &SectorSelection::empty(), &taxonomy()).unwrap();
        assert_eq!(r.adjusted_score, 50.0);
        assert!(r.baseline_defaulted);
    }

    #[test]
    fn article_matching_two_sectors_counts_once() {
        let pool = vec![
            art("m1", &["Copper mining", "Energy"], SentimentLabel::Negative, 20.0),
            art("m2", &["Mining"], SentimentLabel::Positive, 70.0),
        ];
        let e = Entity::new("cl", "Chile", Some(70.0));
        let r = blend(&e, &pool, &SectorSelection::parse("energy,mining"), &taxonomy()).unwrap();
        assert_eq!(r.matched_article_count, 2);
        assert_eq!(r.sentiment_mix.total(), 2);
        assert_eq!(r.trend, Trend::Stable);
        // energy: 0.5*10 + 0.5*20 = 15; mining: 0.5*20 + 0.5*45 = 32.5
        let agg = r.sector_aggregate.unwrap();
        assert!((agg - 23.75).abs() < 1e-9);
        assert!((r.adjusted_score - (35.0 + 0.5 * 23.75)).abs() < 1e-9);
    }

    #[test]
    fn undefined_sectors_are_left_out_of_the_mean() {
        let e = Entity::new("de", "Germany", Some(60.0));
        let r = blend(
            &e,
            &energy_pool(),
            &SectorSelection::parse("energy,healthcare"),
            &taxonomy(),
        )
        .unwrap();
        // healthcare matched nothing; aggregate is energy alone
        assert_eq!(r.sector_aggregate, Some(50.0));
        assert!((r.adjusted_score - 55.0).abs() < 1e-9);
    }

    #[test]
    fn inputs_are_untouched() {
        let pool = energy_pool();
        let before = pool.clone();
        let e = Entity::new("de", "Germany", Some(60.0));
        let _ = blend(&e, &pool, &SectorSelection::parse("energy"), &taxonomy()).unwrap();
        assert_eq!(pool, before);
    }
}

// src/rerank/scorer.rs
//! Sector score from the articles matched to one sector.
//!
//! sector = 0.5 * volume + 0.5 * sentiment
//! - volume    = min(10 * matched, 100)
//! - sentiment = mean of scored sentiment (> 0), or 50 if nothing is scored
//!
//! No matches → `None` ("insufficient evidence"), which is not the same as 0.
//! No rounding here; presentation rounds.

use crate::article::Article;

pub const POINTS_PER_ARTICLE: f64 = 10.0;
pub const VOLUME_CAP: f64 = 100.0;
/// Used when no matched article carries a usable sentiment score.
pub const NEUTRAL_SENTIMENT: f64 = 50.0;
pub const VOLUME_WEIGHT: f64 = 0.5;
pub const SENTIMENT_WEIGHT: f64 = 0.5;

/// Coverage component.
pub fn volume_score(matched: usize) -> f64 {
    (matched as f64 * POINTS_PER_ARTICLE).min(VOLUME_CAP)
}

/// Mean of scored sentiment; unscored articles are excluded, not counted as 0.
pub fn sentiment_average(matched: &[&Article]) -> f64 {
    let (sum, n) = matched
        .iter()
        .filter_map(|a| a.scored_sentiment())
        .fold((0.0f64, 0usize), |(s, n), x| (s + x, n + 1));
    if n == 0 {
        NEUTRAL_SENTIMENT
    } else {
        sum / n as f64
    }
}

pub fn score_sector(matched: &[&Article]) -> Option<f64> {
    if matched.is_empty() {
        return None;
    }
    let volume = volume_score(matched.len());
    let sentiment = sentiment_average(matched);
    Some(VOLUME_WEIGHT * volume + SENTIMENT_WEIGHT * sentiment)
}

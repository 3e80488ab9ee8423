//! Input records: ranked entities and the tagged news articles about them.
//!
//! Both are owned by the caller; the engine only borrows them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Midpoint substituted for a missing baseline score.
pub const DEFAULT_BASELINE: f64 = 50.0;

/// A ranked subject (a country in the dashboard).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    /// Externally supplied suitability score, usually 0..=100.
    #[serde(default)]
    pub baseline_score: Option<f64>,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, baseline_score: Option<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            baseline_score,
        }
    }

    /// Baseline if known and finite. NaN/inf count as unknown.
    pub fn known_baseline(&self) -> Option<f64> {
        self.baseline_score.filter(|b| b.is_finite())
    }

    /// Baseline with the midpoint substituted when unknown.
    pub fn effective_baseline(&self) -> f64 {
        self.known_baseline().unwrap_or(DEFAULT_BASELINE)
    }
}

/// Sentiment label attached by the upstream news feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    /// Case-insensitive parse; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(SentimentLabel::Positive),
            "neutral" => Some(SentimentLabel::Neutral),
            "negative" => Some(SentimentLabel::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Feed sends "Positive"/"POSITIVE" as often as "positive".
impl<'de> Deserialize<'de> for SentimentLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SentimentLabel::parse(&raw).ok_or_else(|| {
            serde::de::Error::unknown_variant(&raw, &["positive", "neutral", "negative"])
        })
    }
}

/// Immutable news record. Only `topics`, `sentiment_label` and
/// `sentiment_score` influence scoring; `published_at` is carried through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub sentiment_label: SentimentLabel,
    /// 0..=100; `<= 0` means unscored.
    #[serde(default)]
    pub sentiment_score: f64,
    pub published_at: DateTime<Utc>,
}

impl Article {
    pub fn new(
        id: impl Into<String>,
        topics: impl IntoIterator<Item = impl Into<String>>,
        sentiment_label: SentimentLabel,
        sentiment_score: f64,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            topics: topics.into_iter().map(Into::into).collect(),
            sentiment_label,
            sentiment_score,
            published_at,
        }
    }

    /// Score usable for averaging, or `None` when unscored.
    pub fn scored_sentiment(&self) -> Option<f64> {
        let s = self.sentiment_score;
        (s.is_finite() && s > 0.0).then_some(s)
    }
}

//! Sentiment mix and trend over a set of articles.
//!
//! Trend je jen porovnání počtů: více pozitivních → upward, více negativních → downward,
//! jinak stable. Skóre se zde nepoužívá.

use serde::{Deserialize, Serialize};

use crate::article::{Article, SentimentLabel};

/// Counts of articles by sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentMix {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentMix {
    /// Count labels over any iterator of article references.
    pub fn from_articles<'a, I>(articles: I) -> Self
    where
        I: IntoIterator<Item = &'a Article>,
    {
        let mut mix = Self::default();
        for a in articles {
            mix.record(a.sentiment_label);
        }
        mix
    }

    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    pub fn trend(&self) -> Trend {
        use std::cmp::Ordering;
        match self.positive.cmp(&self.negative) {
            Ordering::Greater => Trend::Upward,
            Ordering::Less => Trend::Downward,
            Ordering::Equal => Trend::Stable,
        }
    }
}

/// Three-valued sentiment direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Upward,
    Downward,
    Stable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn art(label: SentimentLabel) -> Article {
        Article::new("x", ["Energy"], label, 50.0, Utc::now())
    }

    #[test]
    fn counts_and_trend() {
        let v = vec![
            art(SentimentLabel::Positive),
            art(SentimentLabel::Positive),
            art(SentimentLabel::Neutral),
            art(SentimentLabel::Negative),
        ];
        let mix = SentimentMix::from_articles(&v);
        assert_eq!(
            mix,
            SentimentMix {
                positive: 2,
                neutral: 1,
                negative: 1
            }
        );
        assert_eq!(mix.total(), 4);
        assert_eq!(mix.trend(), Trend::Upward);
    }

    #[test]
    fn tie_and_empty_are_stable() {
        assert_eq!(SentimentMix::default().trend(), Trend::Stable);
        let v = vec![art(SentimentLabel::Positive), art(SentimentLabel::Negative)];
        assert_eq!(SentimentMix::from_articles(&v).trend(), Trend::Stable);
        // neutral-only is still stable
        let v = vec![art(SentimentLabel::Neutral)];
        assert_eq!(SentimentMix::from_articles(&v).trend(), Trend::Stable);
    }

    #[test]
    fn negative_majority_is_downward() {
        let v = vec![art(SentimentLabel::Negative), art(SentimentLabel::Neutral)];
        assert_eq!(SentimentMix::from_articles(&v).trend(), Trend::Downward);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Upward).unwrap(), "\"upward\"");
    }
}

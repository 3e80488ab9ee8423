// src/lib.rs
//! Sector-weighted re-ranking of entity (country) suitability scores.
//!
//! Inputs: baseline scores, per-entity pools of topic-tagged news with
//! sentiment, a sector selection and a sector→keywords taxonomy.
//! Outputs: adjusted score, sentiment mix + trend per entity, and a stable
//! ranking. Everything here is a pure function of its inputs.
//!
//! ```
//! use chrono::Utc;
//! use sector_rerank::{blend, Article, Entity, SectorSelection, SentimentLabel, Taxonomy};
//!
//! let taxonomy = Taxonomy::default_seed();
//! let germany = Entity::new("de", "Germany", Some(60.0));
//! let news = vec![
//!     Article::new("a1", ["Energy"], SentimentLabel::Positive, 80.0, Utc::now()),
//!     Article::new("a2", ["Energy"], SentimentLabel::Positive, 60.0, Utc::now()),
//!     Article::new("a3", ["Energy"], SentimentLabel::Neutral, 0.0, Utc::now()),
//! ];
//! let r = blend(&germany, &news, &SectorSelection::parse("energy"), &taxonomy).unwrap();
//! assert!((r.adjusted_score - 55.0).abs() < 1e-9);
//! ```

pub mod article;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod selection;
pub mod sentiment;
pub mod snapshot;
pub mod taxonomy;

// Matcher, scorer, blender, ranker and the combined pipeline
pub mod rerank;

// ---- Re-exports for stable public API ----
pub use crate::article::{Article, Entity, SentimentLabel, DEFAULT_BASELINE};
pub use crate::error::{ConfigurationError, TaxonomyError};
pub use crate::rerank::{
    blend, filter_by_sector, matches, rank, rerank_entities, score_sector, ArticlePool,
    RankedEntity, Ranking, ScoreBasis, ScoringResult, SectorBreakdown,
};
pub use crate::selection::SectorSelection;
pub use crate::sentiment::{SentimentMix, Trend};
pub use crate::taxonomy::{SectorDefinition, Taxonomy};

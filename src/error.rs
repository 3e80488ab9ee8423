//! Typed errors for the rerank engine.
//!
//! Two families exist:
//! - [`ConfigurationError`]: a selection names a sector the taxonomy does not know.
//!   This is a deployment/programming bug and must reach the caller.
//! - [`TaxonomyError`]: the taxonomy itself is malformed (raised while building it).
//!
//! Sparse data (missing baseline, no matching articles, no scored sentiment) is
//! *not* an error; it degrades to documented fallbacks inside the blender.

use thiserror::Error;

/// Selection references a sector id that is absent from the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown sector `{id}`{}", suggestion_suffix(.suggestion))]
    UnknownSector {
        id: String,
        /// Closest known sector id, if one is similar enough.
        suggestion: Option<String>,
    },
}

impl ConfigurationError {
    /// The offending sector id.
    pub fn sector_id(&self) -> &str {
        match self {
            ConfigurationError::UnknownSector { id, .. } => id,
        }
    }
}

fn suggestion_suffix(s: &Option<String>) -> String {
    match s {
        Some(known) => format!(" (did you mean `{known}`?)"),
        None => String::new(),
    }
}

/// Malformed taxonomy content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("taxonomy must define at least one sector")]
    Empty,
    #[error("sector at position {index} has a blank id")]
    BlankId { index: usize },
    #[error("duplicate sector id `{id}`")]
    DuplicateId { id: String },
    #[error("sector `{id}` has no usable keywords")]
    NoKeywords { id: String },
}

//! The caller's sector filter for one recomputation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::taxonomy::normalize_id;

/// Set of selected sector ids. Empty means "no filtering".
///
/// Ids are normalized (trimmed, lowercased) on insert and iterate in sorted
/// order, so two selections with the same members always score identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SectorSelection {
    ids: BTreeSet<String>,
}

impl SectorSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list, e.g. `"energy, Healthcare"`.
    pub fn parse(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Adds an id; blank ids are ignored. Returns whether it was new.
    pub fn insert(&mut self, id: &str) -> bool {
        let id = normalize_id(id);
        if id.is_empty() {
            return false;
        }
        self.ids.insert(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(&normalize_id(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SectorSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut sel = Self::default();
        for id in iter {
            sel.insert(id.as_ref());
        }
        sel
    }
}

impl From<Vec<String>> for SectorSelection {
    fn from(v: Vec<String>) -> Self {
        v.into_iter().collect()
    }
}

impl From<SectorSelection> for Vec<String> {
    fn from(s: SectorSelection) -> Self {
        s.ids.into_iter().collect()
    }
}

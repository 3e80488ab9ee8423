//! # Sector Taxonomy
//!
//! Static mapping of sector identifiers to topic keyword lists.
//!
//! - Built-in `default_seed()` with the sectors the dashboard offers.
//! - Loads from TOML or JSON (`[[sectors]]` tables / `{"sectors": [...]}`).
//! - Ids are case-insensitive (stored trimmed + lowercased); keywords are trimmed.
//! - Validated once at construction; never mutated afterwards.
//!
//! Lookup order for `load_default()`:
//! 1) `$SECTOR_TAXONOMY_PATH` (must exist)
//! 2) `config/sectors.toml`
//! 3) `config/sectors.json`
//! 4) built-in seed

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use strsim::normalized_levenshtein;
use tracing::info;

use crate::error::{ConfigurationError, TaxonomyError};

pub const DEFAULT_TAXONOMY_PATH: &str = "config/sectors.toml";
pub const FALLBACK_TAXONOMY_JSON_PATH: &str = "config/sectors.json";
pub const ENV_TAXONOMY_PATH: &str = "SECTOR_TAXONOMY_PATH";

/// Minimum normalized Levenshtein similarity for a "did you mean" hint.
const SUGGESTION_MIN_SIMILARITY: f64 = 0.7;

/// One selectable sector and the topic keywords that define it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorDefinition {
    pub id: String,
    pub keywords: Vec<String>,
}

impl SectorDefinition {
    pub fn new(id: impl Into<String>, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// File shape shared by the TOML and JSON formats.
#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    sectors: Vec<SectorDefinition>,
}

/// Validated, immutable set of sector definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    sectors: Vec<SectorDefinition>,
    index: HashMap<String, usize>,
}

static DEFAULT_SEED: Lazy<Taxonomy> = Lazy::new(|| {
    let raw: &[(&str, &[&str])] = &[
        (
            "energy",
            &["Energy", "Oil", "Gas", "Renewable", "Solar", "Wind", "Electricity", "Hydrogen", "Nuclear"],
        ),
        (
            "healthcare",
            &["Healthcare", "Health", "Medical", "Pharmaceutical", "Hospital", "Biotech"],
        ),
        (
            "technology",
            &["Technology", "Tech", "Software", "Digital", "Artificial Intelligence", "Semiconductor", "Startup"],
        ),
        (
            "finance",
            &["Finance", "Banking", "Investment", "Fintech", "Capital Markets", "Insurance"],
        ),
        (
            "agriculture",
            &["Agriculture", "Farming", "Agribusiness", "Food Security", "Crop", "Livestock"],
        ),
        (
            "manufacturing",
            &["Manufacturing", "Industrial", "Automotive", "Factory", "Supply Chain"],
        ),
        (
            "infrastructure",
            &["Infrastructure", "Construction", "Transport", "Logistics", "Port", "Railway"],
        ),
        (
            "mining",
            &["Mining", "Minerals", "Metals", "Lithium", "Copper", "Gold"],
        ),
        ("tourism", &["Tourism", "Travel", "Hospitality", "Aviation"]),
        (
            "telecommunications",
            &["Telecommunications", "Telecom", "Broadband", "5G", "Mobile Network"],
        ),
    ];
    let sectors = raw
        .iter()
        .map(|(id, kws)| SectorDefinition::new(*id, kws.iter().copied()))
        .collect();
    // The literal above is known-good; a failure here is a bug in the seed itself.
    Taxonomy::new(sectors).expect("built-in sector seed is valid")
});

impl Taxonomy {
    /// Validate and normalize a list of sector definitions.
    ///
    /// Order is preserved. Blank keywords are dropped; a sector left without
    /// keywords is rejected.
    pub fn new(sectors: Vec<SectorDefinition>) -> Result<Self, TaxonomyError> {
        if sectors.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut out = Vec::with_capacity(sectors.len());
        let mut index = HashMap::with_capacity(sectors.len());

        for (i, s) in sectors.into_iter().enumerate() {
            let id = normalize_id(&s.id);
            if id.is_empty() {
                return Err(TaxonomyError::BlankId { index: i });
            }
            if index.contains_key(&id) {
                return Err(TaxonomyError::DuplicateId { id });
            }

            let keywords: Vec<String> = s
                .keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
            if keywords.is_empty() {
                return Err(TaxonomyError::NoKeywords { id });
            }

            index.insert(id.clone(), out.len());
            out.push(SectorDefinition { id, keywords });
        }

        Ok(Self {
            sectors: out,
            index,
        })
    }

    /// Built-in taxonomy used when no config file is present.
    pub fn default_seed() -> Self {
        DEFAULT_SEED.clone()
    }

    pub fn sectors(&self) -> &[SectorDefinition] {
        &self.sectors
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.sectors.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// Always `false` for a constructed taxonomy; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, id: &str) -> Option<&SectorDefinition> {
        self.index.get(&normalize_id(id)).map(|&i| &self.sectors[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Keywords of a sector, or a `ConfigurationError` naming the unknown id.
    pub fn keywords(&self, id: &str) -> Result<&[String], ConfigurationError> {
        match self.get(id) {
            Some(s) => Ok(&s.keywords),
            None => Err(ConfigurationError::UnknownSector {
                id: id.to_string(),
                suggestion: self.suggest(id),
            }),
        }
    }

    /// Closest known id by normalized Levenshtein, if similar enough.
    fn suggest(&self, id: &str) -> Option<String> {
        let needle = normalize_id(id);
        self.ids()
            .map(|known| (known, normalized_levenshtein(&needle, known)))
            .filter(|(_, sim)| *sim >= SUGGESTION_MIN_SIMILARITY)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(known, _)| known.to_string())
    }

    /* -------- loading -------- */

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: TaxonomyFile = toml::from_str(s).context("parsing sector taxonomy TOML")?;
        Ok(Self::new(file.sectors)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let file: TaxonomyFile =
            serde_json::from_str(s).context("parsing sector taxonomy JSON")?;
        Ok(Self::new(file.sectors)?)
    }

    /// Load from an explicit path. Format is picked by extension; anything
    /// else is tried as TOML first, then JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading sector taxonomy from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let file = parse_file(&content, ext.as_str())
            .with_context(|| format!("sector taxonomy at {}", path.display()))?;
        let taxonomy = Self::new(file.sectors)
            .with_context(|| format!("validating sector taxonomy at {}", path.display()))?;

        info!(
            path = %path.display(),
            sectors = taxonomy.len(),
            "loaded sector taxonomy"
        );
        Ok(taxonomy)
    }

    /// Env override → `config/sectors.toml` → `config/sectors.json` → seed.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_TAXONOMY_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!(
                "{ENV_TAXONOMY_PATH} points to non-existent path {}",
                pb.display()
            ));
        }
        let toml_p = PathBuf::from(DEFAULT_TAXONOMY_PATH);
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        let json_p = PathBuf::from(FALLBACK_TAXONOMY_JSON_PATH);
        if json_p.exists() {
            return Self::load_from(&json_p);
        }
        info!("no sector taxonomy file found; using built-in seed");
        Ok(Self::default_seed())
    }
}

fn parse_file(s: &str, hint_ext: &str) -> Result<TaxonomyFile> {
    match hint_ext {
        "toml" => Ok(toml::from_str(s)?),
        "json" => Ok(serde_json::from_str(s)?),
        _ => {
            if let Ok(f) = toml::from_str::<TaxonomyFile>(s) {
                return Ok(f);
            }
            if let Ok(f) = serde_json::from_str::<TaxonomyFile>(s) {
                return Ok(f);
            }
            Err(anyhow!("unsupported sector taxonomy format"))
        }
    }
}

/// Sector ids compare trimmed and lowercased.
pub(crate) fn normalize_id(s: &str) -> String {
    s.trim().to_lowercase()
}

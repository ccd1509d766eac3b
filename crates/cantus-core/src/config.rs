//! Rule catalog loading for cantus.
//!
//! Reads `.cantus/rules.json` and turns it into an immutable, ordered list of
//! rule descriptors. Falls back to the built-in first-species catalog when the
//! file is missing. Entries whose id has no evaluator are kept aside as
//! unimplemented so the file can document rules ahead of their code.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{RuleId, Severity};

pub const CANTUS_DIR: &str = ".cantus";
pub const CATALOG_FILE: &str = "rules.json";
pub const SUPPORTED_SPECIES: &str = "first";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse rule catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported species '{0}' (only \"first\" is implemented)")]
    UnsupportedSpecies(String),

    #[error("rule '{0}' is declared more than once")]
    DuplicateRule(String),
}

/// Persisted form of the catalog, exactly as it appears on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    pub species: String,
    pub rules: Vec<RuleEntry>,
}

/// One raw rule entry. `id` is still an unchecked string here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub id: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
}

fn default_true() -> bool {
    true
}

/// A rule entry whose id resolved to an implemented evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub id: RuleId,
    pub enabled: bool,
    pub severity: Severity,
    pub description: String,
}

impl RuleDescriptor {
    pub fn new(id: RuleId, severity: Severity, description: &str) -> Self {
        Self {
            id,
            enabled: true,
            severity,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CatalogEntry {
    Rule(RuleDescriptor),
    Unimplemented(RuleEntry),
}

/// Validated, ordered rule catalog. Never mutated once built: the `with_*`
/// methods return a new catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        use RuleId::*;
        use Severity::{Error, Warning};

        let rules = [
            (EqualLength, Error, "Cantus firmus and counterpoint must have the same number of notes"),
            (WholeNotesOnly, Error, "First species uses whole notes only"),
            (NoVoiceCrossing, Error, "The lower voice must stay below the upper voice"),
            (VerticalConsonance, Error, "Every vertical interval must be a consonance (unison, third, fifth, sixth, octave)"),
            (PerfectStartAndEnd, Error, "Begin and end on a perfect consonance (unison, fifth, or octave)"),
            (NoParallelPerfects, Error, "No parallel fifths or octaves"),
            (NoRepeatedNotesCf, Warning, "The cantus firmus should not repeat a note"),
            (OneRepeatedNoteCpt, Warning, "The counterpoint may repeat a note at most once"),
            (UniqueClimax, Warning, "Each line should reach its highest note exactly once"),
            (CadenceCf, Error, "The cantus firmus must end with scale degree 2 descending to 1"),
            (CadenceCpt, Error, "The counterpoint must end with scale degree 7 ascending to 1"),
        ];

        Self::from_descriptors(
            rules
                .into_iter()
                .map(|(id, severity, description)| RuleDescriptor::new(id, severity, description))
                .collect(),
        )
    }
}

impl RuleCatalog {
    pub fn from_descriptors(rules: Vec<RuleDescriptor>) -> Self {
        Self {
            entries: rules.into_iter().map(CatalogEntry::Rule).collect(),
        }
    }

    /// Validate a persisted document. Unknown ids are not an error.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, ConfigError> {
        if doc.species != SUPPORTED_SPECIES {
            return Err(ConfigError::UnsupportedSpecies(doc.species));
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(doc.rules.len());
        for entry in doc.rules {
            if !seen.insert(entry.id.clone()) {
                return Err(ConfigError::DuplicateRule(entry.id));
            }
            match entry.id.parse::<RuleId>() {
                Ok(id) => entries.push(CatalogEntry::Rule(RuleDescriptor {
                    id,
                    enabled: entry.enabled,
                    severity: entry.severity,
                    description: entry.description,
                })),
                Err(_) => {
                    debug!(rule = %entry.id, "rule has no implementation; it will be skipped");
                    entries.push(CatalogEntry::Unimplemented(entry));
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let doc: CatalogDocument = serde_json::from_str(content)?;
        Self::from_document(doc)
    }

    /// Load the catalog at `path`, or the built-in catalog if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no rule catalog found, using built-in rules");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading rule catalog");
        Self::from_json_str(&content)
    }

    /// Default catalog location under a project directory.
    pub fn default_path(project_dir: &Path) -> PathBuf {
        project_dir.join(CANTUS_DIR).join(CATALOG_FILE)
    }

    /// Implemented rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &RuleDescriptor> + '_ {
        self.entries.iter().filter_map(|e| match e {
            CatalogEntry::Rule(d) => Some(d),
            CatalogEntry::Unimplemented(_) => None,
        })
    }

    /// Entries whose id has no evaluator, in declaration order.
    pub fn unimplemented(&self) -> impl Iterator<Item = &RuleEntry> + '_ {
        self.entries.iter().filter_map(|e| match e {
            CatalogEntry::Unimplemented(raw) => Some(raw),
            CatalogEntry::Rule(_) => None,
        })
    }

    pub fn get(&self, id: RuleId) -> Option<&RuleDescriptor> {
        self.rules().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of this catalog with one rule switched on or off.
    pub fn with_enabled(mut self, id: RuleId, enabled: bool) -> Self {
        for entry in &mut self.entries {
            if let CatalogEntry::Rule(d) = entry {
                if d.id == id {
                    d.enabled = enabled;
                }
            }
        }
        self
    }

    /// Copy of this catalog with one rule's severity replaced.
    pub fn with_severity(mut self, id: RuleId, severity: Severity) -> Self {
        for entry in &mut self.entries {
            if let CatalogEntry::Rule(d) = entry {
                if d.id == id {
                    d.severity = severity;
                }
            }
        }
        self
    }

    /// Copy of this catalog with every rule outside `ids` disabled.
    pub fn restricted_to(mut self, ids: &[RuleId]) -> Self {
        for entry in &mut self.entries {
            if let CatalogEntry::Rule(d) = entry {
                d.enabled = d.enabled && ids.contains(&d.id);
            }
        }
        self
    }

    /// Back to the persisted form, unimplemented entries included.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            species: SUPPORTED_SPECIES.to_string(),
            rules: self
                .entries
                .iter()
                .map(|e| match e {
                    CatalogEntry::Rule(d) => RuleEntry {
                        id: d.id.as_str().to_string(),
                        enabled: d.enabled,
                        severity: d.severity,
                        description: d.description.clone(),
                    },
                    CatalogEntry::Unimplemented(raw) => raw.clone(),
                })
                .collect(),
        }
    }
}

/// Shared access to the current catalog. Readers take an `Arc` snapshot that
/// stays valid for a whole lint run; `reload` swaps in a fresh one.
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<RuleCatalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<RuleCatalog> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    pub fn replace(&self, catalog: RuleCatalog) -> Arc<RuleCatalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::clone(&next);
        next
    }

    /// Re-read `path`. On failure the current snapshot is left untouched.
    pub fn reload(&self, path: &Path) -> Result<Arc<RuleCatalog>, ConfigError> {
        let catalog = RuleCatalog::load(path)?;
        Ok(self.replace(catalog))
    }
}

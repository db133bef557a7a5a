//! Catalog: the loaded language table.
//!
//! The built-in table ships inside the binary and is parsed once, on first
//! access, into a `OnceLock` singleton. Alternate tables can be loaded from a
//! file; either way the table is never mutated after loading.

use crate::catalog::record::SourceEntry;
use crate::catalog::{CatalogValidator, LanguageRecord};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

const BUILTIN_TABLE: &str = include_str!("../../data/languages.json");

/// Global built-in catalog (initialized lazily)
static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Top-level `(name, entry)` pairs in file order, repeated names included.
struct TableEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for TableEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = TableEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object keyed by language name")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TableEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, entry)) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push((name, entry));
                }
                Ok(TableEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read language table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("language table is not a JSON object keyed by language name: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid entry for {language}: {source}")]
    Entry {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid language table: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },
}

/// An immutable, validated language table.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<LanguageRecord>,
    warnings: Vec<String>,
}

impl Catalog {
    /// Get the built-in catalog.
    ///
    /// # Panics
    /// Panics if the embedded table fails to load, which the test suite rules out.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            Catalog::from_json(BUILTIN_TABLE).expect("Embedded language table should be valid")
        })
    }

    /// Read and validate a table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read language table from {}", path.display());
        Self::from_json(&text)
    }

    /// Parse and validate a table from its JSON text.
    ///
    /// Table order follows the key order of the JSON object. A name that appears
    /// twice fails validation instead of replacing the earlier entry.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let TableEntries(entries) = serde_json::from_str(text)?;

        let records = entries
            .into_iter()
            .map(|(language, value)| match serde_json::from_value::<SourceEntry>(value) {
                Ok(entry) => Ok(entry.into_record(language)),
                Err(source) => Err(CatalogError::Entry { language, source }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Build a catalog from already-normalized records.
    pub fn from_records(records: Vec<LanguageRecord>) -> Result<Self, CatalogError> {
        let report = CatalogValidator::validate(&records);
        if report.has_errors() {
            return Err(CatalogError::Invalid {
                errors: report.errors,
            });
        }

        for warning in &report.warnings {
            warn!("Language table: {}", warning);
        }

        Ok(Self {
            records,
            warnings: report.warnings,
        })
    }

    /// Look up a language by its exact name.
    pub fn get(&self, name: &str) -> Option<&LanguageRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn records(&self) -> &[LanguageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Language names in table order (the language dropdown).
    pub fn language_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Every distinct state across the table, in first-appearance order
    /// (the state multiselect).
    pub fn state_names(&self) -> Vec<&str> {
        let mut states: Vec<&str> = Vec::new();
        for state in self.records.iter().flat_map(|r| r.states.iter()) {
            if !states.contains(&state.as_str()) {
                states.push(state);
            }
        }
        states
    }

    /// Non-fatal problems found while loading.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

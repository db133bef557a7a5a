//! Language and state selection over a catalog.
//!
//! `filter` picks one language by name and, when states are selected, keeps it
//! only if it is spoken in at least one of them. States match by exact name;
//! "Pradesh" does not select a language spoken in "Uttar Pradesh".

use crate::catalog::{Catalog, LanguageRecord};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Language '{language}' not found")]
    NotFound { language: String },

    #[error("Speaker data not available for {language}")]
    MissingData { language: String },
}

/// The rows selected by one language + states choice.
///
/// An empty `rows` is a valid outcome: the state filter excluded the language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResult<'a> {
    /// The language that was asked for
    pub language: String,

    /// States that were asked for, deduplicated, in selection order
    pub selected_states: Vec<String>,

    /// Matching records (zero or one)
    pub rows: Vec<&'a LanguageRecord>,

    /// Per-state breakdown is only drawn when no states were selected
    pub show_state_breakdown: bool,
}

impl<'a> FilterResult<'a> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The matching record, if the state filter kept it.
    pub fn record(&self) -> Option<&'a LanguageRecord> {
        self.rows.first().copied()
    }

    /// Sum of speaker counts over the result rows; 0 for an empty result.
    ///
    /// Fails with `MissingData` if a row has no speaker figure.
    pub fn total_speakers(&self) -> Result<u64, FilterError> {
        self.rows.iter().try_fold(0u64, |total, record| {
            record
                .speaker_count
                .map(|count| total.saturating_add(count))
                .ok_or_else(|| FilterError::MissingData {
                    language: record.name.clone(),
                })
        })
    }
}

/// Select `language` from `catalog`, narrowed to `states` when any are given.
pub fn filter<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    language: &str,
    states: &[S],
) -> Result<FilterResult<'a>, FilterError> {
    let record = catalog.get(language).ok_or_else(|| FilterError::NotFound {
        language: language.to_string(),
    })?;

    let mut selected_states: Vec<String> = Vec::with_capacity(states.len());
    for state in states {
        let state = state.as_ref();
        if !selected_states.iter().any(|s| s == state) {
            selected_states.push(state.to_string());
        }
    }

    let keep = selected_states.is_empty()
        || record.is_spoken_in_any(selected_states.iter().map(String::as_str));

    debug!(
        "Filtered {} by {} state(s): {}",
        language,
        selected_states.len(),
        if keep { "match" } else { "no match" }
    );

    Ok(FilterResult {
        language: record.name.clone(),
        show_state_breakdown: selected_states.is_empty(),
        selected_states,
        rows: if keep { vec![record] } else { Vec::new() },
    })
}

impl Catalog {
    /// Shorthand for [`filter`] against this catalog.
    pub fn filter<S: AsRef<str>>(
        &self,
        language: &str,
        states: &[S],
    ) -> Result<FilterResult<'_>, FilterError> {
        filter(self, language, states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_STATES: &[&str] = &[];

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    // ==================== Scenarios ====================

    #[test]
    fn test_tamil_without_states() {
        let result = filter(catalog(), "Tamil", NO_STATES).unwrap();

        assert_eq!(result.rows.len(), 1);
        let record = result.record().unwrap();
        assert_eq!(record.name, "Tamil");
        assert_eq!(record.family, "Dravidian");
        assert_eq!(result.total_speakers(), Ok(77_000_000));
        assert!(result.show_state_breakdown);
    }

    #[test]
    fn test_hindi_in_bihar() {
        let result = filter(catalog(), "Hindi", &["Bihar"]).unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.record().unwrap().name, "Hindi");
        assert!(!result.show_state_breakdown);
    }

    #[test]
    fn test_tamil_in_punjab_is_empty() {
        let result = filter(catalog(), "Tamil", &["Punjab"]).unwrap();

        assert!(result.is_empty());
        assert!(result.record().is_none());
        assert_eq!(result.total_speakers(), Ok(0));
        assert!(!result.show_state_breakdown);
    }

    #[test]
    fn test_kannada_uses_unified_speaker_count() {
        let result = filter(catalog(), "Kannada", NO_STATES).unwrap();
        assert_eq!(result.total_speakers(), Ok(43_000_000));
    }

    #[test]
    fn test_idempotent() {
        let first = filter(catalog(), "Hindi", &["Bihar", "Kerala"]).unwrap();
        let second = filter(catalog(), "Hindi", &["Bihar", "Kerala"]).unwrap();
        assert_eq!(first, second);
    }

    // ==================== Properties over the Table ====================

    #[test]
    fn test_every_language_without_states_returns_itself() {
        for name in catalog().language_names() {
            let result = filter(catalog(), name, NO_STATES).unwrap();
            assert_eq!(result.rows.len(), 1, "{}", name);
            assert_eq!(result.record().unwrap().name, name);
            assert!(result.show_state_breakdown);
        }
    }

    #[test]
    fn test_disjoint_states_always_empty() {
        for record in catalog().records() {
            let disjoint: Vec<&str> = catalog()
                .state_names()
                .into_iter()
                .filter(|s| !record.is_spoken_in(s))
                .collect();

            let result = filter(catalog(), &record.name, disjoint.as_slice()).unwrap();
            assert!(result.is_empty(), "{} matched {:?}", record.name, disjoint);
        }
    }

    #[test]
    fn test_intersecting_states_keep_the_same_row() {
        for record in catalog().records() {
            let unfiltered = filter(catalog(), &record.name, NO_STATES).unwrap();
            for state in &record.states {
                let narrowed = filter(catalog(), &record.name, &[state.as_str(), "Nowhere"]).unwrap();
                assert_eq!(narrowed.rows, unfiltered.rows);
                assert!(!narrowed.show_state_breakdown);
            }
        }
    }

    // ==================== Matching Rules ====================

    #[test]
    fn test_partial_state_name_does_not_match() {
        let result = filter(catalog(), "Hindi", &["Pradesh"]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_selected_states_deduplicated() {
        let result = filter(catalog(), "Marathi", &["Goa", "Goa", "Maharashtra"]).unwrap();
        assert_eq!(result.selected_states, vec!["Goa", "Maharashtra"]);
    }

    // ==================== Errors ====================

    #[test]
    fn test_unknown_language() {
        let result = filter(catalog(), "Klingon", NO_STATES);
        assert_eq!(
            result.unwrap_err(),
            FilterError::NotFound {
                language: "Klingon".to_string()
            }
        );
    }

    #[test]
    fn test_missing_speaker_count() {
        let catalog = Catalog::from_json(
            r#"{"Odia": {"family": "Indo-Aryan", "script": "Odia script",
                "official_status": "Official language of Odisha", "states": ["Odisha"]}}"#,
        )
        .unwrap();

        let result = catalog.filter("Odia", NO_STATES).unwrap();
        assert_eq!(result.rows.len(), 1);
        let err = result.total_speakers().unwrap_err();
        assert_eq!(err.to_string(), "Speaker data not available for Odia");
    }

    #[test]
    fn test_missing_speaker_count_ignored_when_filtered_out() {
        let catalog = Catalog::from_json(
            r#"{"Odia": {"family": "Indo-Aryan", "script": "Odia script",
                "official_status": "Official language of Odisha", "states": ["Odisha"]}}"#,
        )
        .unwrap();

        let result = catalog.filter("Odia", &["Kerala"]).unwrap();
        assert_eq!(result.total_speakers(), Ok(0));
    }
}

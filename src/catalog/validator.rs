//! Catalog validation.
//!
//! Errors make a table unusable (duplicate names, languages without states).
//! Warnings are logged and the table still loads (a language without a
//! speaker figure only loses its demographics section).

use crate::catalog::LanguageRecord;
use std::collections::HashSet;

/// Validation report containing errors and warnings about a language table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that prevent the table from loading
    pub errors: Vec<String>,

    /// Problems that degrade parts of the dashboard
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for language tables.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate a full table.
    pub fn validate(records: &[LanguageRecord]) -> ValidationReport {
        let mut report = ValidationReport::new();

        if records.is_empty() {
            report.errors.push("Language table is empty".to_string());
            return report;
        }

        let mut seen_names = HashSet::new();
        for record in records {
            if record.name.trim().is_empty() {
                report.errors.push("Language with an empty name".to_string());
            } else if !seen_names.insert(record.name.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate language name: {}", record.name));
            }

            Self::validate_record(record, &mut report);
        }

        report
    }

    fn validate_record(record: &LanguageRecord, report: &mut ValidationReport) {
        if record.states.is_empty() {
            report
                .errors
                .push(format!("{}: no states listed", record.name));
        }

        let mut seen_states = HashSet::new();
        for state in &record.states {
            if state.trim().is_empty() {
                report
                    .errors
                    .push(format!("{}: empty state name", record.name));
            } else if !seen_states.insert(state.as_str()) {
                report
                    .warnings
                    .push(format!("{}: state listed twice: {}", record.name, state));
            }
        }

        if record.speaker_count.is_none() {
            report
                .warnings
                .push(format!("{}: speaker count not available", record.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, states: &[&str], speakers: Option<u64>) -> LanguageRecord {
        LanguageRecord {
            name: name.to_string(),
            family: "Dravidian".to_string(),
            script: "Script".to_string(),
            official_status: "Official".to_string(),
            states: states.iter().map(|s| s.to_string()).collect(),
            speaker_count: speakers,
            linguistic_features: String::new(),
            cultural_significance: String::new(),
            learning_resources: String::new(),
        }
    }

    // ==================== Clean Tables ====================

    #[test]
    fn test_clean_table() {
        let records = vec![
            record("Tamil", &["Tamil Nadu", "Puducherry"], Some(77_000_000)),
            record("Kannada", &["Karnataka"], Some(43_000_000)),
        ];
        let report = CatalogValidator::validate(&records);
        assert!(report.is_clean());
    }

    // ==================== Errors ====================

    #[test]
    fn test_empty_table() {
        let report = CatalogValidator::validate(&[]);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("empty"));
    }

    #[test]
    fn test_duplicate_name() {
        let records = vec![
            record("Tamil", &["Tamil Nadu"], Some(1)),
            record("Tamil", &["Puducherry"], Some(2)),
        ];
        let report = CatalogValidator::validate(&records);
        assert_eq!(report.errors, vec!["Duplicate language name: Tamil"]);
    }

    #[test]
    fn test_blank_name() {
        let report = CatalogValidator::validate(&[record("  ", &["Goa"], Some(1))]);
        assert!(report.has_errors());
    }

    #[test]
    fn test_no_states() {
        let report = CatalogValidator::validate(&[record("Odia", &[], Some(1))]);
        assert_eq!(report.errors, vec!["Odia: no states listed"]);
    }

    #[test]
    fn test_blank_state() {
        let report = CatalogValidator::validate(&[record("Odia", &["Odisha", ""], Some(1))]);
        assert_eq!(report.errors, vec!["Odia: empty state name"]);
    }

    // ==================== Warnings ====================

    #[test]
    fn test_missing_speaker_count_is_warning() {
        let report = CatalogValidator::validate(&[record("Odia", &["Odisha"], None)]);
        assert!(!report.has_errors());
        assert_eq!(report.warnings, vec!["Odia: speaker count not available"]);
    }

    #[test]
    fn test_repeated_state_is_warning() {
        let report =
            CatalogValidator::validate(&[record("Marathi", &["Goa", "Goa"], Some(1))]);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("Goa"));
    }

    #[test]
    fn test_report_default_is_clean() {
        assert!(ValidationReport::default().is_clean());
    }
}

//! Language record: one row of the catalog.

use serde::{Deserialize, Serialize};

/// Everything the dashboard knows about one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// Unique display name (e.g., "Tamil")
    pub name: String,

    /// Language family (e.g., "Dravidian", "Indo-Aryan")
    pub family: String,

    /// Writing system
    pub script: String,

    /// Free-text description of official recognition
    pub official_status: String,

    /// States where the language has presence, in source order
    pub states: Vec<String>,

    /// Estimated total speakers; `None` when the source entry had no figure
    pub speaker_count: Option<u64>,

    pub linguistic_features: String,
    pub cultural_significance: String,
    pub learning_resources: String,
}

impl LanguageRecord {
    /// Check whether the language is present in `state` (exact name match).
    pub fn is_spoken_in(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    /// Check whether the language is present in at least one of `states`.
    pub fn is_spoken_in_any<'a, I>(&self, states: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        states.into_iter().any(|state| self.is_spoken_in(state))
    }
}

/// A catalog entry as written in the table file.
///
/// The value of a JSON object keyed by language name. Older entries spell the
/// speaker figure `number_of_speakers`, newer ones `speakers`; both land in
/// the same field. An entry carrying both keys is rejected rather than having
/// one figure silently win.
#[derive(Debug, Deserialize)]
pub(crate) struct SourceEntry {
    family: String,
    script: String,
    official_status: String,
    states: Vec<String>,
    #[serde(default, alias = "number_of_speakers")]
    speakers: Option<u64>,
    #[serde(default)]
    linguistic_features: String,
    #[serde(default)]
    cultural_significance: String,
    #[serde(default)]
    learning_resources: String,
}

impl SourceEntry {
    pub(crate) fn into_record(self, name: String) -> LanguageRecord {
        LanguageRecord {
            name,
            family: self.family,
            script: self.script,
            official_status: self.official_status,
            states: self.states,
            speaker_count: self.speakers,
            linguistic_features: self.linguistic_features,
            cultural_significance: self.cultural_significance,
            learning_resources: self.learning_resources,
        }
    }
}

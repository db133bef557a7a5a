/// All user-facing strings of the dashboard.
///
/// Placeholders are written `{name}` and filled with `str::replace` by the
/// view builder.
#[derive(Debug, Clone)]
pub struct DashboardStrings {
    // ==================== Page Headers ====================
    /// Page title
    pub title: &'static str,

    /// Line under the title
    /// Placeholders: {language}
    pub details_for: &'static str,

    // ==================== Section Headers ====================
    pub basic_info_header: &'static str,
    pub geography_header: &'static str,
    pub demographics_header: &'static str,
    pub features_header: &'static str,
    pub resources_header: &'static str,

    // ==================== Field Labels ====================
    pub family_label: &'static str,
    pub script_label: &'static str,
    pub official_status_label: &'static str,
    pub linguistic_features_label: &'static str,
    pub cultural_significance_label: &'static str,

    // ==================== Charts ====================
    /// Choropleth title
    /// Placeholders: {language}
    pub map_title: &'static str,

    /// Per-state bar chart title
    /// Placeholders: {language}
    pub breakdown_title: &'static str,

    /// Placeholders: {count}
    pub total_speakers: &'static str,

    // ==================== Warnings ====================
    /// Shown in place of demographics when the speaker figure is missing
    pub speaker_data_unavailable: &'static str,

    /// Shown in place of every record section when the state filter excludes the language
    pub no_data: &'static str,
}

impl DashboardStrings {
    pub fn get() -> &'static DashboardStrings {
        &ENGLISH_STRINGS
    }
}

static ENGLISH_STRINGS: DashboardStrings = DashboardStrings {
    title: "Bharat Bhasha Kosha: Indian Language Treasure",
    details_for: "Details for: *{language}*",

    basic_info_header: "Basic Information",
    geography_header: "Geographical Distribution",
    demographics_header: "Demographic Information",
    features_header: "Linguistic & Cultural Features",
    resources_header: "Learning Resources",

    family_label: "Family",
    script_label: "Script",
    official_status_label: "Official Status",
    linguistic_features_label: "Linguistic Features",
    cultural_significance_label: "Cultural Significance",

    map_title: "Speaker Distribution for {language}",
    breakdown_title: "Speaker Distribution by State for {language}",
    total_speakers: "Total Speakers: {count}",

    speaker_data_unavailable: "Speaker data not available for the selected language and/or states.",
    no_data: "No data for the selected language and states.",
};

/// Format a count with comma thousands separators (77000000 -> "77,000,000").
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

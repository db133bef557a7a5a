//! Dashboard view: the page sections built from one filter result.
//!
//! `DashboardView` serializes as the HTTP response body; its `Display` impl
//! prints the same sections as plain text.

use crate::catalog::LanguageRecord;
use crate::config::GeoConfig;
use crate::dashboard::strings::{format_count, DashboardStrings};
use crate::filter::FilterResult;
use serde::Serialize;
use std::fmt;
use tracing::warn;

const COLOR_SCALE: &str = "Viridis";
const MAP_SCOPE: &str = "asia";

/// One page of the dashboard, ready to serialize or print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub details_for: String,
    pub language: String,
    pub selected_states: Vec<String>,

    /// Set when the state filter excluded the language; every record section is then `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,

    pub basic_info: Option<BasicInfo>,
    pub map: ChoroplethSpec,
    pub demographics: Option<Demographics>,
    pub features: Option<Features>,
    pub learning_resources: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicInfo {
    pub family: String,
    pub script: String,
    pub official_status: String,
}

/// Map shaded by speakers per state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoroplethSpec {
    pub title: String,
    pub geojson_url: String,
    /// Feature property the state names are matched against
    pub feature_id_key: String,
    pub color_scale: &'static str,
    pub scope: &'static str,
    pub points: Vec<StatePoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatePoint {
    pub state: String,
    pub speakers: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demographics {
    pub total_speakers: Option<u64>,
    pub total_label: Option<String>,
    pub breakdown: Option<BarChartSpec>,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChartSpec {
    pub title: String,
    pub bars: Vec<StatePoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Features {
    pub linguistic_features: String,
    pub cultural_significance: String,
}

impl DashboardView {
    pub fn build(result: &FilterResult<'_>, geo: &GeoConfig) -> Self {
        let strings = DashboardStrings::get();
        let language = result.language.as_str();

        let mut view = Self {
            title: strings.title.to_string(),
            details_for: strings.details_for.replace("{language}", language),
            language: language.to_string(),
            selected_states: result.selected_states.clone(),
            notice: None,
            basic_info: None,
            map: ChoroplethSpec {
                title: strings.map_title.replace("{language}", language),
                geojson_url: geo.geojson_url.clone(),
                feature_id_key: geo.feature_id_key.clone(),
                color_scale: COLOR_SCALE,
                scope: MAP_SCOPE,
                points: Vec::new(),
            },
            demographics: None,
            features: None,
            learning_resources: None,
        };

        let Some(record) = result.record() else {
            view.notice = Some(strings.no_data.to_string());
            return view;
        };

        view.basic_info = Some(BasicInfo {
            family: record.family.clone(),
            script: record.script.clone(),
            official_status: record.official_status.clone(),
        });
        view.map.points = state_points(record);
        view.demographics = Some(demographics(result, record, strings));
        view.features = Some(Features {
            linguistic_features: record.linguistic_features.clone(),
            cultural_significance: record.cultural_significance.clone(),
        });
        view.learning_resources = Some(record.learning_resources.clone());

        view
    }
}

/// Every state of the record shaded with the record's speaker figure.
fn state_points(record: &LanguageRecord) -> Vec<StatePoint> {
    match record.speaker_count {
        Some(speakers) => record
            .states
            .iter()
            .map(|state| StatePoint {
                state: state.clone(),
                speakers,
            })
            .collect(),
        None => Vec::new(),
    }
}

fn demographics(
    result: &FilterResult<'_>,
    record: &LanguageRecord,
    strings: &DashboardStrings,
) -> Demographics {
    match result.total_speakers() {
        Ok(total) => Demographics {
            total_speakers: Some(total),
            total_label: Some(
                strings
                    .total_speakers
                    .replace("{count}", &format_count(total)),
            ),
            breakdown: result.show_state_breakdown.then(|| BarChartSpec {
                title: strings.breakdown_title.replace("{language}", &record.name),
                bars: state_points(record),
            }),
            warning: None,
        },
        Err(e) => {
            warn!("{}", e);
            Demographics {
                total_speakers: None,
                total_label: None,
                breakdown: None,
                warning: Some(strings.speaker_data_unavailable.to_string()),
            }
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strings = DashboardStrings::get();

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.details_for)?;

        if let Some(notice) = &self.notice {
            writeln!(f)?;
            return writeln!(f, "{}", notice);
        }

        if let Some(info) = &self.basic_info {
            writeln!(f, "\n## {}", strings.basic_info_header)?;
            writeln!(f, "{}: {}", strings.family_label, info.family)?;
            writeln!(f, "{}: {}", strings.script_label, info.script)?;
            writeln!(f, "{}: {}", strings.official_status_label, info.official_status)?;
        }

        writeln!(f, "\n## {}", strings.geography_header)?;
        writeln!(f, "{}", self.map.title)?;
        write_points(f, &self.map.points)?;

        if let Some(demographics) = &self.demographics {
            writeln!(f, "\n## {}", strings.demographics_header)?;
            if let Some(label) = &demographics.total_label {
                writeln!(f, "{}", label)?;
            }
            if let Some(chart) = &demographics.breakdown {
                writeln!(f, "{}", chart.title)?;
                write_points(f, &chart.bars)?;
            }
            if let Some(warning) = &demographics.warning {
                writeln!(f, "Warning: {}", warning)?;
            }
        }

        if let Some(features) = &self.features {
            writeln!(f, "\n## {}", strings.features_header)?;
            writeln!(
                f,
                "{}: {}",
                strings.linguistic_features_label, features.linguistic_features
            )?;
            writeln!(
                f,
                "{}: {}",
                strings.cultural_significance_label, features.cultural_significance
            )?;
        }

        if let Some(resources) = &self.learning_resources {
            writeln!(f, "\n## {}", strings.resources_header)?;
            writeln!(f, "{}", resources)?;
        }

        Ok(())
    }
}

fn write_points(f: &mut fmt::Formatter<'_>, points: &[StatePoint]) -> fmt::Result {
    for point in points {
        writeln!(f, "  {}: {}", point.state, format_count(point.speakers))?;
    }
    Ok(())
}

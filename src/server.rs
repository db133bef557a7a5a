//! HTTP routes over the dashboard.
//!
//! - `GET /health`
//! - `GET /api/languages` : language dropdown options
//! - `GET /api/states` : state multiselect options
//! - `GET /api/languages/:name?states=Bihar,Punjab` : the dashboard page
//!
//! `states` may also be repeated (`?states=Bihar&states=Punjab`), as an HTML
//! multiselect submits it; both forms can be mixed.

use crate::catalog::Catalog;
use crate::config::GeoConfig;
use crate::dashboard::DashboardView;
use crate::filter::FilterError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// State shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub geo: Arc<GeoConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, geo: GeoConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            geo: Arc::new(geo),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    NotFound,
    Internal,
}

/// Error body, `{"detail": "...", "code": "NOT_FOUND"}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub detail: String,
    pub code: ApiErrorCode,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.code {
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Missing speaker data is recovered inside the dashboard view, so only an
/// unknown language is a client error; anything else is a server fault.
impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        let code = match err {
            FilterError::NotFound { .. } => ApiErrorCode::NotFound,
            _ => ApiErrorCode::Internal,
        };
        Self {
            detail: err.to_string(),
            code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    languages: usize,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(list_languages))
        .route("/api/states", get(list_states))
        .route("/api/languages/:name", get(language_view))
        .fallback(|| async {
            warn!("Unmatched request - 404 Not Found");
            (StatusCode::NOT_FOUND, "404 Not Found")
        })
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        languages: state.catalog.len(),
    })
}

async fn list_languages(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .language_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

async fn list_states(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .state_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

async fn language_view(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DashboardView>, ApiError> {
    let states = parse_states(
        params
            .iter()
            .filter(|(key, _)| key == "states")
            .map(|(_, value)| value.as_str()),
    );
    let result = state.catalog.filter(&name, states.as_slice())?;

    info!(
        "Dashboard for {} ({} state filter(s), {} row(s))",
        name,
        states.len(),
        result.rows.len()
    );

    Ok(Json(DashboardView::build(&result, &state.geo)))
}

/// Split every `states` query value on commas, dropping blank entries.
pub fn parse_states<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_states() {
        assert!(parse_states(std::iter::empty::<&str>()).is_empty());
        assert!(parse_states([""]).is_empty());
        assert_eq!(parse_states(["Bihar"]), vec!["Bihar"]);
        assert_eq!(
            parse_states([" Tamil Nadu , ,Puducherry,"]),
            vec!["Tamil Nadu", "Puducherry"]
        );
    }

    #[test]
    fn test_parse_states_repeated_values() {
        assert_eq!(
            parse_states(["Bihar", "Kerala,Goa"]),
            vec!["Bihar", "Kerala", "Goa"]
        );
    }

    #[test]
    fn test_api_error_from_not_found() {
        let err = ApiError::from(FilterError::NotFound {
            language: "Klingon".to_string(),
        });
        assert_eq!(err.code, ApiErrorCode::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail, "Language 'Klingon' not found");
    }

    #[test]
    fn test_api_error_missing_data_is_internal() {
        let err = ApiError::from(FilterError::MissingData {
            language: "Odia".to_string(),
        });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

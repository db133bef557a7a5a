//! Environment configuration.
//!
//! Read once at startup, after `.env` has been loaded.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Public India state boundaries, keyed by `properties.ST_NM`
pub const DEFAULT_GEOJSON_URL: &str = "https://gist.githubusercontent.com/jbrobst/56c13bbbf9d97d187fea05c96d1670fc/raw/e388c4cae20aa53cb5090210a42ebb9b765c0a03/india_states.geojson";
pub const DEFAULT_GEOJSON_FEATURE_KEY: &str = "properties.ST_NM";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Data
    /// Alternate language table; the embedded table is used when unset
    pub catalog_path: Option<PathBuf>,

    // Map
    pub geo: GeoConfig,
}

/// Where the choropleth gets its state boundaries from.
///
/// Only referenced by the view model, never fetched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoConfig {
    pub geojson_url: String,
    pub feature_id_key: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            geojson_url: DEFAULT_GEOJSON_URL.to_string(),
            feature_id_key: DEFAULT_GEOJSON_FEATURE_KEY.to_string(),
        }
    }
}

impl GeoConfig {
    pub fn from_env() -> Self {
        Self {
            geojson_url: std::env::var("GEOJSON_URL")
                .unwrap_or_else(|_| DEFAULT_GEOJSON_URL.to_string()),
            feature_id_key: std::env::var("GEOJSON_FEATURE_KEY")
                .unwrap_or_else(|_| DEFAULT_GEOJSON_FEATURE_KEY.to_string()),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("PORT is not a valid port: {}", v))?,
                Err(_) => 8080,
            },

            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            geo: GeoConfig::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_config_default() {
        let geo = GeoConfig::default();
        assert_eq!(geo.feature_id_key, "properties.ST_NM");
        assert!(geo.geojson_url.ends_with("india_states.geojson"));
    }
}

//! Configuration management for rqlens.
//!
//! Handles loading configuration from TOML files, covering the SPARQL
//! endpoint to display, the example-query directory, and map view defaults.

use crate::error::{Result, RqlensError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for rqlens.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// SPARQL endpoint the displayed results originate from.
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Example query settings.
    #[serde(default)]
    pub queries: QueriesConfig,

    /// Map view defaults.
    #[serde(default)]
    pub map: MapConfig,
}

/// SPARQL endpoint configuration.
///
/// rqlens never executes queries itself; the endpoint URL is carried for
/// display in the header so a result set can be traced back to its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Endpoint URL shown in the header bar.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
}

fn default_endpoint_url() -> String {
    "/sparql".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
        }
    }
}

/// Example query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueriesConfig {
    /// Directory containing `.rq` example query files.
    #[serde(default = "default_queries_dir")]
    pub dir: PathBuf,

    /// Query shown when an example fails to load.
    #[serde(default = "default_query")]
    pub default: String,
}

fn default_queries_dir() -> PathBuf {
    PathBuf::from("queries")
}

fn default_query() -> String {
    "SELECT * WHERE {\n  ?s ?p ?o\n} LIMIT 10".to_string()
}

impl Default for QueriesConfig {
    fn default() -> Self {
        Self {
            dir: default_queries_dir(),
            default: default_query(),
        }
    }
}

/// Map view defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial viewport center latitude.
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Initial viewport center longitude.
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,

    /// Initial zoom level (slippy-map style: visible span is 360 / 2^zoom degrees).
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Zoom cap applied when fitting the viewport to plotted points.
    #[serde(default = "default_max_fit_zoom")]
    pub max_fit_zoom: u8,
}

fn default_center_lat() -> f64 {
    20.0
}

fn default_center_lon() -> f64 {
    0.0
}

fn default_zoom() -> u8 {
    2
}

fn default_max_fit_zoom() -> u8 {
    10
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            zoom: default_zoom(),
            max_fit_zoom: default_max_fit_zoom(),
        }
    }
}

impl Config {
    /// Returns the default config file path.
    ///
    /// Uses the platform config directory (`~/.config/rqlens/config.toml` on Linux).
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rqlens")
            .join("config.toml")
    }

    /// Loads configuration from the given file path.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RqlensError::config(format!("Could not read {}: {e}", path.display()))
        })?;

        Self::parse(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| RqlensError::config(format!("Invalid config file: {e}")))
    }
}

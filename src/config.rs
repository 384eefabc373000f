//! Dashboard Configuration
//! Input file locations and the season the dashboard analyses.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Optional override file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "dashboard.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Where the two datasets live and which season to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub events_path: PathBuf,
    pub regions_path: PathBuf,
    pub season: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            events_path: PathBuf::from("athlete_events.csv"),
            regions_path: PathBuf::from("noc_regions.csv"),
            season: "Summer".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Read a JSON config file. Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Use `dashboard.json` from the working directory when present.
    pub fn discover() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            tracing::info!("Using config from {}", path.display());
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

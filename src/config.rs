//! Configuration loading
//!
//! Resolution order: an explicit path from the command line, then
//! `showroom.toml` in the working directory, then the user config
//! directory. A missing file falls back to defaults; command line flags
//! override file values.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, ShowroomError};

/// Catalog document location used when nothing else is configured.
pub const DEFAULT_CATALOG_SOURCE: &str = "car-data.json";

/// Request timeout applied to catalog and image check calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog document location: an http(s) URL or a local path.
    pub catalog: String,

    /// Image verification endpoint. Verification is skipped when unset.
    pub verify_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG_SOURCE.to_string(),
            verify_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit path when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = PathBuf::from("showroom.toml");
        if local.exists() {
            return Self::from_file(&local);
        }

        if let Some(user) = Self::user_config_path() {
            if user.exists() {
                return Self::from_file(&user);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ShowroomError::Config(format!("{}: {e}", path.display())))
    }

    fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "showroom", "showroom")
            .map(|dirs| dirs.config_dir().join("showroom.toml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

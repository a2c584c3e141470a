//! TOML-based application configuration.
//!
//! Stores the spectator's defaults:
//! - Arrival preference and transportation mode
//! - Home starting location
//! - Live routing backend base URL
//!
//! Stored at `~/.config/matchday/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::geo::UserLocation;
use crate::preference::ArrivalPreference;
use crate::travel::TransportationMode;

/// Planning defaults applied when the caller does not specify them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    #[serde(default = "default_preference")]
    pub preference: ArrivalPreference,
    #[serde(default = "default_mode")]
    pub mode: TransportationMode,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            preference: default_preference(),
            mode: default_mode(),
        }
    }
}

fn default_preference() -> ArrivalPreference {
    ArrivalPreference::Balanced
}

fn default_mode() -> TransportationMode {
    TransportationMode::Driving
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/matchday/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Live routing backend base URL.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default)]
    pub planning: PlanningConfig,
    /// Saved home starting location (optional).
    #[serde(default)]
    pub home: Option<UserLocation>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planning: PlanningConfig::default(),
            backend_url: default_backend_url(),
            home: None,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/matchday"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration file.
    ///
    /// # Errors
    /// [`ConfigError::LoadFailed`] when the file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load the configuration, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist the configuration.
    ///
    /// # Errors
    /// [`ConfigError::SaveFailed`] when serialization or the write fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("~/.config/matchday/config.toml"),
            message: e.to_string(),
        })?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }
}

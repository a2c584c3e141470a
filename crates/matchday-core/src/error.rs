//! Core error types for matchday-core.
//!
//! The planner itself is total over well-formed inputs; the only
//! recoverable failure path is the external routing fetch, which the
//! assembler surfaces verbatim. Malformed section strings never error --
//! they degrade to "no match" inside the gate selector.

use std::path::PathBuf;
use thiserror::Error;

use crate::routing::CollaboratorError;

/// Umbrella error type for matchday-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Schedule generation failed
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schedule store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures the schedule assembler can surface.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The routing/crowd collaborator could not be reached. Propagated to
    /// the caller as-is; the assembler never substitutes fabricated data.
    #[error("routing collaborator unavailable: {0}")]
    RoutingUnavailable(#[from] CollaboratorError),

    /// The venue has zero gates. Fatal configuration error -- must never
    /// occur for valid reference data.
    #[error("venue '{venue}' has no gates configured")]
    NoGateAvailable { venue: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Schedule-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open schedule store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("No stored schedule with id '{id}'")]
    NotFound { id: String },

    #[error("Stored schedule could not be (de)serialized: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

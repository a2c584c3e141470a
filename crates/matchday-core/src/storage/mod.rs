//! Local storage: TOML configuration and the SQLite schedule store.

mod config;
mod store;

pub use config::{Config, PlanningConfig};
pub use store::{ScheduleStore, StoredScheduleSummary};

use std::path::PathBuf;

/// Returns `~/.config/matchday[-dev]/` based on MATCHDAY_ENV.
///
/// Set MATCHDAY_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MATCHDAY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("matchday-dev")
    } else {
        base_dir.join("matchday")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

//! The timed event a schedule is planned around.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::venue::Venue;

/// A fixture with a fixed kickoff instant.
///
/// Immutable once created; every timeline step is computed backward from
/// `kickoff`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub venue: Venue,
    pub kickoff: DateTime<Utc>,
}

impl Event {
    /// Display title, e.g. "Argentina vs France".
    pub fn title(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

//! Shared fixtures and argument types for the CLI commands.
//!
//! The sample fixture stands in for the event catalog the full product
//! loads from the backend; the demo-vs-live choice the core requires is
//! made here, by flags, never inside the engine.

use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;

use matchday_core::{
    ArrivalPreference, Coordinate, CrowdLevel, Event, Gate, TransportationMode, UserLocation,
    Venue,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PreferenceArg {
    Relaxed,
    Balanced,
    Efficient,
}

impl From<PreferenceArg> for ArrivalPreference {
    fn from(value: PreferenceArg) -> Self {
        match value {
            PreferenceArg::Relaxed => ArrivalPreference::Relaxed,
            PreferenceArg::Balanced => ArrivalPreference::Balanced,
            PreferenceArg::Efficient => ArrivalPreference::Efficient,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Driving,
    Transit,
    Rideshare,
    Walking,
}

impl From<ModeArg> for TransportationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Driving => TransportationMode::Driving,
            ModeArg::Transit => TransportationMode::PublicTransit,
            ModeArg::Rideshare => TransportationMode::Rideshare,
            ModeArg::Walking => TransportationMode::Walking,
        }
    }
}

/// Built-in sample venue: MetLife with three gates.
pub fn sample_venue() -> Venue {
    let gate = |id: &str, name: &str, ranges: &[&str], level: CrowdLevel| Gate {
        id: id.into(),
        name: name.into(),
        location: Coordinate::new(40.8135, -74.0745),
        capacity: 15_000,
        recommended_for: ranges.iter().map(|r| r.to_string()).collect(),
        crowd_level: level,
    };
    Venue {
        id: "metlife".into(),
        name: "MetLife Stadium".into(),
        location: Coordinate::new(40.8128, -74.0742),
        capacity: 82_500,
        gates: vec![
            gate("gate-a", "Gate A", &["101-130"], CrowdLevel::Moderate),
            gate("gate-c", "Gate C", &["131-150", "201-230"], CrowdLevel::Clear),
            gate("gate-d", "Gate D", &["231-250", "301-350"], CrowdLevel::Moderate),
        ],
    }
}

/// Built-in sample fixture at the sample venue.
pub fn sample_event(kickoff: DateTime<Utc>) -> Event {
    Event {
        id: "m-104".into(),
        home_team: "Argentina".into(),
        away_team: "France".into(),
        venue: sample_venue(),
        kickoff,
    }
}

/// Default starting point when no home location is configured.
pub fn sample_origin() -> UserLocation {
    UserLocation::new("Downtown hotel", Coordinate::new(40.7549, -73.9840))
}

/// Parse an RFC3339 kickoff, defaulting to a few hours from now.
pub fn parse_kickoff(raw: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match raw {
        Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc)),
        None => Ok(Utc::now() + Duration::hours(5)),
    }
}

//! Travel estimates and the opaque reservation inputs.
//!
//! [`TravelEstimate`] is produced by the routing collaborator; the engine
//! only reads it. [`ParkingReservation`] and [`FoodOrder`] arrive from the
//! booking layer as confirmed records and are never mutated here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the spectator gets to the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportationMode {
    Driving,
    PublicTransit,
    Rideshare,
    Walking,
}

impl TransportationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::PublicTransit => "publicTransit",
            Self::Rideshare => "rideshare",
            Self::Walking => "walking",
        }
    }

    /// Only driving involves a parking leg.
    pub fn requires_parking(&self) -> bool {
        matches!(self, Self::Driving)
    }
}

/// Congestion classification of a route, derived from the ratio of
/// in-traffic duration to free-flow duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Ratio thresholds: under 1.1 light, under 1.3 moderate, else heavy.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 1.1 {
            Self::Light
        } else if ratio < 1.3 {
            Self::Moderate
        } else {
            Self::Heavy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }
}

/// One origin-to-venue travel lookup result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimate {
    /// Expected door-to-door minutes, traffic included.
    pub travel_time_minutes: i64,
    /// Minutes of the above attributable to traffic.
    pub traffic_delay_minutes: i64,
    pub distance_miles: f64,
    /// The mode this estimate was computed for.
    pub mode: TransportationMode,
    pub traffic_level: TrafficLevel,
}

/// A confirmed parking booking. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingReservation {
    pub spot_id: String,
    pub name: String,
    pub address: String,
    pub walking_time_to_stadium_min: i64,
    pub confirmation_code: String,
}

/// A pre-ordered food pickup. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodOrder {
    pub vendor: String,
    /// Where to collect it, e.g. "Section 134 concourse".
    pub location: String,
    pub pickup_time: DateTime<Utc>,
    pub confirmation_code: String,
}

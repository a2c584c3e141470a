//! Crowd forecast data fetched per planning request.
//!
//! A [`CrowdForecast`] is produced by the routing collaborator, consumed
//! once, and discarded -- the core never caches it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::venue::{CrowdLevel, Gate, Venue};

/// Venue-wide congestion, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrowdIntensity {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl CrowdIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "veryHigh",
            Self::Extreme => "extreme",
        }
    }

    /// Map an occupancy percentage (0-100) onto an intensity bucket.
    pub fn from_percentage(pct: u8) -> Self {
        match pct {
            0..=29 => Self::Low,
            30..=49 => Self::Moderate,
            50..=69 => Self::High,
            70..=84 => Self::VeryHigh,
            _ => Self::Extreme,
        }
    }
}

/// Whether on-site parking is expected to have free spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkingAvailability {
    Available,
    Limited,
}

/// Expected queue minutes at venue choke points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitEstimates {
    pub security_min: u32,
    pub concessions_min: u32,
    pub restrooms_min: u32,
}

impl WaitEstimates {
    /// Derive waits from an occupancy percentage (0-100).
    pub fn from_percentage(pct: u8) -> Self {
        let pct = u32::from(pct);
        Self {
            security_min: pct / 10,
            concessions_min: pct / 8,
            restrooms_min: pct / 15,
        }
    }
}

/// Per-gate crowd levels plus the venue-wide picture.
///
/// Immutable once obtained from the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrowdForecast {
    /// Live congestion keyed by gate id. Gates absent here fall back to
    /// their static [`Gate::crowd_level`].
    pub gate_levels: HashMap<String, CrowdLevel>,
    pub overall_intensity: CrowdIntensity,
    /// Gate ids ranked least-crowded first.
    pub recommended_gates: Vec<String>,
    /// Expected occupancy at the forecast instant, 0-100.
    pub crowd_percentage: u8,
    /// Human-readable congestion peaks, e.g. "2 hours before kickoff".
    #[serde(default)]
    pub peak_times: Vec<String>,
    pub parking: ParkingAvailability,
    pub waits: WaitEstimates,
}

impl CrowdForecast {
    /// Effective crowd level for a gate: the live forecast value when the
    /// forecast covers the gate, the gate's static level otherwise.
    pub fn level_for(&self, gate: &Gate) -> CrowdLevel {
        self.gate_levels
            .get(&gate.id)
            .copied()
            .unwrap_or(gate.crowd_level)
    }

    /// Resolve the top recommended gate id against a venue's gate list.
    pub fn top_recommended<'a>(&self, venue: &'a Venue) -> Option<&'a Gate> {
        self.recommended_gates
            .iter()
            .find_map(|id| venue.gates.iter().find(|g| &g.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    fn gate(id: &str, level: CrowdLevel) -> Gate {
        Gate {
            id: id.into(),
            name: format!("Gate {id}"),
            location: Coordinate::new(0.0, 0.0),
            capacity: 10_000,
            recommended_for: Vec::new(),
            crowd_level: level,
        }
    }

    #[test]
    fn intensity_percentage_buckets() {
        assert_eq!(CrowdIntensity::from_percentage(0), CrowdIntensity::Low);
        assert_eq!(CrowdIntensity::from_percentage(29), CrowdIntensity::Low);
        assert_eq!(CrowdIntensity::from_percentage(45), CrowdIntensity::Moderate);
        assert_eq!(CrowdIntensity::from_percentage(55), CrowdIntensity::High);
        assert_eq!(CrowdIntensity::from_percentage(84), CrowdIntensity::VeryHigh);
        assert_eq!(CrowdIntensity::from_percentage(100), CrowdIntensity::Extreme);
    }

    #[test]
    fn wait_estimates_follow_percentage() {
        let w = WaitEstimates::from_percentage(85);
        assert_eq!(w.security_min, 8);
        assert_eq!(w.concessions_min, 10);
        assert_eq!(w.restrooms_min, 5);
    }

    #[test]
    fn level_for_prefers_forecast_over_static() {
        let g = gate("north", CrowdLevel::Crowded);
        let forecast = CrowdForecast {
            gate_levels: HashMap::from([("north".to_string(), CrowdLevel::Clear)]),
            overall_intensity: CrowdIntensity::Low,
            recommended_gates: vec!["north".into()],
            crowd_percentage: 20,
            peak_times: Vec::new(),
            parking: ParkingAvailability::Available,
            waits: WaitEstimates::from_percentage(20),
        };
        assert_eq!(forecast.level_for(&g), CrowdLevel::Clear);

        let unknown = gate("south", CrowdLevel::Moderate);
        assert_eq!(forecast.level_for(&unknown), CrowdLevel::Moderate);
    }
}

//! On-time-arrival confidence scoring.
//!
//! A deterministic pure function: start at 100, apply independent
//! deductions for gate crowding, venue-wide intensity, and traffic delay,
//! add the preference bonus, clamp to [60, 100]. No randomness, no I/O.

use serde::{Deserialize, Serialize};

use crate::crowd::CrowdIntensity;
use crate::preference::ArrivalPreference;
use crate::venue::CrowdLevel;

pub const MIN_SCORE: i32 = 60;
pub const MAX_SCORE: i32 = 100;

/// Per-input contributions, for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub gate_crowd_penalty: i32,
    pub venue_intensity_penalty: i32,
    pub traffic_penalty: i32,
    pub preference_bonus: i32,
    /// Unclamped sum.
    pub raw: i32,
    /// Final clamped score.
    pub score: u8,
}

/// Score with the full deduction breakdown.
pub fn breakdown(
    gate_crowd: CrowdLevel,
    venue_intensity: CrowdIntensity,
    traffic_delay_minutes: i64,
    preference: ArrivalPreference,
) -> ConfidenceBreakdown {
    let gate_crowd_penalty = match gate_crowd {
        CrowdLevel::Clear => 0,
        CrowdLevel::Moderate => 10,
        CrowdLevel::Crowded => 20,
        CrowdLevel::Avoid => 30,
    };

    let venue_intensity_penalty = match venue_intensity {
        CrowdIntensity::Low => 0,
        CrowdIntensity::Moderate => 5,
        CrowdIntensity::High => 10,
        CrowdIntensity::VeryHigh => 15,
        CrowdIntensity::Extreme => 20,
    };

    // Bucketed, not linear.
    let traffic_penalty = if traffic_delay_minutes > 20 {
        15
    } else if traffic_delay_minutes > 10 {
        10
    } else if traffic_delay_minutes > 5 {
        5
    } else {
        0
    };

    let preference_bonus = preference.confidence_bonus();

    let raw = 100 - gate_crowd_penalty - venue_intensity_penalty - traffic_penalty
        + preference_bonus;

    ConfidenceBreakdown {
        gate_crowd_penalty,
        venue_intensity_penalty,
        traffic_penalty,
        preference_bonus,
        raw,
        score: raw.clamp(MIN_SCORE, MAX_SCORE) as u8,
    }
}

/// Confidence score in [60, 100].
pub fn score(
    gate_crowd: CrowdLevel,
    venue_intensity: CrowdIntensity,
    traffic_delay_minutes: i64,
    preference: ArrivalPreference,
) -> u8 {
    breakdown(gate_crowd, venue_intensity, traffic_delay_minutes, preference).score
}

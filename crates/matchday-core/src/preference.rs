//! Arrival preference and the fixed offsets it maps to.

use serde::{Deserialize, Serialize};

/// How much slack the spectator wants before kickoff.
///
/// Each preference maps to a fixed arrival target, a confidence bonus,
/// and the security-buffer/duration pair used by the timeline builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrivalPreference {
    Relaxed,
    Balanced,
    Efficient,
}

impl ArrivalPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Balanced => "balanced",
            Self::Efficient => "efficient",
        }
    }

    /// Target arrival: minutes before kickoff.
    pub fn minutes_before_kickoff(&self) -> i64 {
        match self {
            Self::Relaxed => 120,
            Self::Balanced => 90,
            Self::Efficient => 60,
        }
    }

    /// Flat bonus added to the confidence score.
    pub fn confidence_bonus(&self) -> i32 {
        match self {
            Self::Relaxed => 15,
            Self::Balanced => 10,
            Self::Efficient => 5,
        }
    }

    /// Minutes before kickoff the entry step is scheduled at.
    pub fn security_buffer_min(&self) -> i64 {
        match self {
            Self::Relaxed => 75,
            Self::Balanced => 65,
            Self::Efficient => 60,
        }
    }

    /// Expected minutes spent getting through the gate. The tighter
    /// `efficient` buffer lands in denser queues, so its estimate is
    /// longer, not shorter.
    pub fn entry_duration_min(&self) -> i64 {
        match self {
            Self::Relaxed | Self::Balanced => 15,
            Self::Efficient => 20,
        }
    }

    /// Expected minutes to find the seat.
    pub fn seat_duration_min(&self) -> i64 {
        match self {
            Self::Relaxed | Self::Balanced => 15,
            Self::Efficient => 10,
        }
    }

    /// Qualitative crowd phrasing for the entry step. Derived from the
    /// preference, not live data, so the entry step stays stable across
    /// forecast refreshes.
    pub fn entry_crowd_phrase(&self) -> &'static str {
        match self {
            Self::Relaxed => "lighter early crowds expected",
            Self::Balanced => "moderate crowds expected",
            Self::Efficient => "peak crowds close to kickoff",
        }
    }
}

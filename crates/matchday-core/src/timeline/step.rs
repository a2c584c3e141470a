//! A single timed action step in a matchday schedule.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// What kind of action a step represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepType {
    Departure,
    Transit,
    Parking,
    Arrival,
    Entry,
    FoodPickup,
    Seating,
    Milestone,
}

impl StepType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Departure => "departure",
            Self::Transit => "transit",
            Self::Parking => "parking",
            Self::Arrival => "arrival",
            Self::Entry => "entry",
            Self::FoodPickup => "foodPickup",
            Self::Seating => "seating",
            Self::Milestone => "milestone",
        }
    }
}

/// One timed action step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStep {
    pub scheduled_time: DateTime<Utc>,
    pub title: String,
    pub description: String,
    /// Opaque icon tag for the presentation layer.
    pub icon: String,
    pub duration_min: i64,
    pub step_type: StepType,
}

impl ScheduleStep {
    /// Instant the step is expected to finish.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.scheduled_time + Duration::minutes(self.duration_min)
    }
}

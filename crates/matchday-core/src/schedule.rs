//! The finished, immutable matchday schedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::Event;
use crate::geo::UserLocation;
use crate::preference::ArrivalPreference;
use crate::timeline::ScheduleStep;
use crate::travel::{FoodOrder, ParkingReservation, TransportationMode};
use crate::venue::Gate;

/// Everything the spectator needs for one matchday, assembled once and
/// never mutated. External layers (persistence, notifications, UI)
/// consume this as an opaque serializable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub event: Event,
    pub origin: UserLocation,
    pub section: Option<String>,
    /// Strictly increasing by `scheduled_time`.
    pub steps: Vec<ScheduleStep>,
    pub gate: Gate,
    /// Why this gate was chosen.
    pub gate_reason: String,
    pub preference: ArrivalPreference,
    pub mode: TransportationMode,
    pub parking: Option<ParkingReservation>,
    pub food: Option<FoodOrder>,
    /// On-time-arrival confidence, 60-100.
    pub confidence: u8,
    /// Instant the schedule was generated.
    pub purchase_date: DateTime<Utc>,
}

impl Schedule {
    /// When the spectator has to leave, i.e. the first step's time.
    pub fn departure_time(&self) -> Option<DateTime<Utc>> {
        self.steps.first().map(|s| s.scheduled_time)
    }

    /// Check the chronological invariant. Always true for schedules
    /// produced by the assembler with well-formed inputs.
    pub fn is_chronological(&self) -> bool {
        self.steps
            .windows(2)
            .all(|pair| pair[0].scheduled_time < pair[1].scheduled_time)
    }
}

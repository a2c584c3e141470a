//! Backward-chained construction of the matchday timeline.
//!
//! Fixed steps anchor at offsets from kickoff; the transportation leg
//! chains backward from the arrival step. Construction order is
//! irrelevant -- the final list is sorted by time, and only the sorted
//! sequence is guaranteed chronologically valid.

use chrono::{DateTime, Duration, Utc};

use crate::event::Event;
use crate::geo::UserLocation;
use crate::preference::ArrivalPreference;
use crate::travel::{FoodOrder, ParkingReservation, TransportationMode, TravelEstimate};
use crate::venue::Gate;

use super::step::{ScheduleStep, StepType};

/// Inputs for one timeline build.
#[derive(Debug, Clone)]
pub struct TimelineRequest<'a> {
    pub event: &'a Event,
    /// Desired at-venue instant. Callers must keep this before kickoff;
    /// the builder does not validate it and may emit a non-monotonic
    /// sequence if the contract is violated.
    pub target_arrival: DateTime<Utc>,
    pub travel: &'a TravelEstimate,
    pub gate: &'a Gate,
    pub preference: ArrivalPreference,
    pub mode: TransportationMode,
    pub origin: &'a UserLocation,
    pub parking: Option<&'a ParkingReservation>,
    pub food: Option<&'a FoodOrder>,
}

/// Whether a drive description carries a traffic warning.
///
/// Tagged explicitly so the formatting branch is testable without string
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficNote {
    Clear,
    Delay(i64),
}

impl TrafficNote {
    /// Delays of 5 minutes or less are not worth mentioning.
    pub fn for_delay(minutes: i64) -> Self {
        if minutes > 5 {
            Self::Delay(minutes)
        } else {
            Self::Clear
        }
    }

    /// Description suffix; empty when there is nothing to warn about.
    pub fn suffix(&self) -> String {
        match self {
            Self::Clear => String::new(),
            Self::Delay(minutes) => format!(" -- expect {minutes} min of traffic delay"),
        }
    }
}

/// Stateless timeline builder. Performs no I/O and cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineBuilder;

impl TimelineBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the ordered step list for one matchday.
    ///
    /// Guarantees, for well-formed inputs: strictly increasing step
    /// times, "Settle in" last, exactly one food outcome (explicit
    /// pickup, generic refreshment, or none), and exactly one
    /// transportation sub-plan (the 3-step parking chain or a single
    /// transit leg).
    pub fn build(&self, req: &TimelineRequest<'_>) -> Vec<ScheduleStep> {
        let kickoff = req.event.kickoff;
        let venue_name = req.event.venue.name.as_str();
        let mut steps: Vec<ScheduleStep> = Vec::with_capacity(8);

        steps.push(ScheduleStep {
            scheduled_time: kickoff - Duration::minutes(30),
            title: "Settle in".to_string(),
            description: format!(
                "{} kicks off at {}",
                req.event.title(),
                kickoff.format("%H:%M")
            ),
            icon: "sportscourt".to_string(),
            duration_min: 30,
            step_type: StepType::Milestone,
        });

        steps.push(ScheduleStep {
            scheduled_time: kickoff - Duration::minutes(45),
            title: "Find your seat".to_string(),
            description: "Locate your section and row".to_string(),
            icon: "chair".to_string(),
            duration_min: req.preference.seat_duration_min(),
            step_type: StepType::Seating,
        });

        // Exactly one food outcome: explicit pickup, generic
        // refreshment for relaxed arrivals, or nothing.
        if let Some(food) = req.food {
            steps.push(ScheduleStep {
                scheduled_time: food.pickup_time,
                title: format!("Pick up your order at {}", food.location),
                description: format!("{} -- confirmation {}", food.vendor, food.confirmation_code),
                icon: "fork.knife".to_string(),
                duration_min: 10,
                step_type: StepType::FoodPickup,
            });
        } else if req.preference == ArrivalPreference::Relaxed {
            steps.push(ScheduleStep {
                scheduled_time: kickoff - Duration::minutes(55),
                title: "Grab food & drinks".to_string(),
                description: "Beat the concourse lines before kickoff".to_string(),
                icon: "fork.knife".to_string(),
                duration_min: 15,
                step_type: StepType::FoodPickup,
            });
        }

        let entry_time = kickoff - Duration::minutes(req.preference.security_buffer_min());
        steps.push(ScheduleStep {
            scheduled_time: entry_time,
            title: "Enter the stadium".to_string(),
            description: format!(
                "Security and ticket check at {} -- {}",
                req.gate.name,
                req.preference.entry_crowd_phrase()
            ),
            icon: "ticket".to_string(),
            duration_min: req.preference.entry_duration_min(),
            step_type: StepType::Entry,
        });

        let arrival_time = entry_time - Duration::minutes(5);
        steps.push(ScheduleStep {
            scheduled_time: arrival_time,
            title: format!("Arrive at {venue_name}"),
            description: format!("Walk to {}", req.gate.name),
            icon: "figure.walk".to_string(),
            duration_min: 5,
            step_type: StepType::Arrival,
        });

        // Exactly one transportation sub-plan; both variants end at the
        // arrival step's scheduled time.
        let leg_start = match (req.mode, req.parking) {
            (TransportationMode::Driving, Some(parking)) => {
                push_parking_chain(&mut steps, req, parking, arrival_time)
            }
            _ => push_transit_leg(&mut steps, req, arrival_time),
        };

        steps.push(ScheduleStep {
            scheduled_time: leg_start - Duration::minutes(5),
            title: format!("Leave {}", req.origin.name),
            description: "Tickets, phone, and confirmations ready".to_string(),
            icon: "house".to_string(),
            duration_min: 5,
            step_type: StepType::Departure,
        });

        // Stable sort: a food pickup landing on another step's instant
        // keeps its position rather than being reordered.
        steps.sort_by_key(|s| s.scheduled_time);
        steps
    }
}

/// Drive, park, then walk over; returns the drive's start time.
fn push_parking_chain(
    steps: &mut Vec<ScheduleStep>,
    req: &TimelineRequest<'_>,
    parking: &ParkingReservation,
    arrival_time: DateTime<Utc>,
) -> DateTime<Utc> {
    let venue_name = req.event.venue.name.as_str();

    let walk_time = arrival_time - Duration::minutes(parking.walking_time_to_stadium_min);
    steps.push(ScheduleStep {
        scheduled_time: walk_time,
        title: format!("Walk to {venue_name}"),
        description: format!(
            "{} min walk from {}",
            parking.walking_time_to_stadium_min, parking.name
        ),
        icon: "figure.walk".to_string(),
        duration_min: parking.walking_time_to_stadium_min,
        step_type: StepType::Transit,
    });

    let park_time = walk_time - Duration::minutes(5);
    steps.push(ScheduleStep {
        scheduled_time: park_time,
        title: format!("Park at {}", parking.name),
        description: format!(
            "Spot {} -- confirmation {}",
            parking.spot_id, parking.confirmation_code
        ),
        icon: "parkingsign.circle".to_string(),
        duration_min: 5,
        step_type: StepType::Parking,
    });

    let drive_time = park_time - Duration::minutes(5 + req.travel.travel_time_minutes);
    let note = TrafficNote::for_delay(req.travel.traffic_delay_minutes);
    steps.push(ScheduleStep {
        scheduled_time: drive_time,
        title: format!("Drive to {}", parking.name),
        description: format!("Head for {}{}", parking.address, note.suffix()),
        icon: "car.fill".to_string(),
        duration_min: req.travel.travel_time_minutes,
        step_type: StepType::Transit,
    });

    drive_time
}

/// Single transit leg for every non-parking combination; returns its
/// start time.
fn push_transit_leg(
    steps: &mut Vec<ScheduleStep>,
    req: &TimelineRequest<'_>,
    arrival_time: DateTime<Utc>,
) -> DateTime<Utc> {
    let venue_name = req.event.venue.name.as_str();
    let minutes = req.travel.travel_time_minutes;
    let transit_time = arrival_time - Duration::minutes(minutes);

    let (icon, title, description) = match req.mode {
        TransportationMode::PublicTransit => (
            "tram.fill",
            format!("Take transit to {venue_name}"),
            format!("About {minutes} min by train or bus"),
        ),
        TransportationMode::Rideshare => (
            "car.circle",
            format!("Rideshare to {venue_name}"),
            format!("About {minutes} min -- request the ride a few minutes early"),
        ),
        TransportationMode::Walking => (
            "figure.walk",
            format!("Walk to {venue_name}"),
            format!("{:.1} miles, about {minutes} min", req.travel.distance_miles),
        ),
        TransportationMode::Driving => {
            let note = TrafficNote::for_delay(req.travel.traffic_delay_minutes);
            (
                "car.fill",
                format!("Drive to {venue_name}"),
                format!("About {minutes} min{}", note.suffix()),
            )
        }
    };

    steps.push(ScheduleStep {
        scheduled_time: transit_time,
        title,
        description,
        icon: icon.to_string(),
        duration_min: minutes,
        step_type: StepType::Transit,
    });

    transit_time
}

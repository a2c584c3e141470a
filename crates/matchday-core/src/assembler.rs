//! Schedule assembly: the one place the pieces meet.
//!
//! Fetch the crowd forecast and travel estimate, pick a gate, build the
//! timeline, score it, and freeze the result into a [`Schedule`]. The
//! collaborator fetch is the assembler's only suspension point; if it
//! fails the error is propagated -- the assembler never substitutes
//! fabricated data (a demo data source is an explicit caller choice, see
//! [`crate::routing`]).

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::confidence;
use crate::error::ScheduleError;
use crate::event::Event;
use crate::gate_selector::select_gate;
use crate::geo::UserLocation;
use crate::preference::ArrivalPreference;
use crate::routing::RoutingCollaborator;
use crate::schedule::Schedule;
use crate::timeline::{TimelineBuilder, TimelineRequest};
use crate::travel::{FoodOrder, ParkingReservation, TransportationMode};

/// One schedule-generation request.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    pub event: Event,
    pub origin: UserLocation,
    pub section: Option<String>,
    pub preference: ArrivalPreference,
    pub mode: TransportationMode,
    pub parking: Option<ParkingReservation>,
    pub food: Option<FoodOrder>,
}

/// Orchestrates gate selection, timeline building, and scoring around a
/// routing collaborator.
pub struct ScheduleAssembler<R> {
    routing: R,
}

impl<R: RoutingCollaborator> ScheduleAssembler<R> {
    pub fn new(routing: R) -> Self {
        Self { routing }
    }

    /// Generate a complete, immutable schedule.
    ///
    /// Concurrent calls are independent; nothing is cached here. Dropping
    /// the returned future cancels any in-flight collaborator request.
    ///
    /// # Errors
    /// [`ScheduleError::RoutingUnavailable`] when the collaborator fails,
    /// [`ScheduleError::NoGateAvailable`] when the venue has no gates.
    pub async fn generate_schedule(&self, req: &ScheduleRequest) -> Result<Schedule, ScheduleError> {
        let venue = &req.event.venue;
        let target_arrival =
            req.event.kickoff - Duration::minutes(req.preference.minutes_before_kickoff());

        // Traffic around the arrival window is what decides on-time
        // arrival, so the estimate is anchored there.
        let forecast = self.routing.crowd_forecast(venue, target_arrival).await?;
        let travel = self
            .routing
            .travel_estimate(
                req.origin.coordinate,
                venue.location,
                target_arrival,
                req.mode,
            )
            .await?;

        let choice = select_gate(req.section.as_deref(), venue, Some(&forecast))?;

        let steps = TimelineBuilder::new().build(&TimelineRequest {
            event: &req.event,
            target_arrival,
            travel: &travel,
            gate: &choice.gate,
            preference: req.preference,
            mode: req.mode,
            origin: &req.origin,
            parking: req.parking.as_ref(),
            food: req.food.as_ref(),
        });

        let score = confidence::score(
            forecast.level_for(&choice.gate),
            forecast.overall_intensity,
            travel.traffic_delay_minutes,
            req.preference,
        );

        Ok(Schedule {
            id: Uuid::new_v4(),
            event: req.event.clone(),
            origin: req.origin.clone(),
            section: req.section.clone(),
            steps,
            gate: choice.gate,
            gate_reason: choice.reason,
            preference: req.preference,
            mode: req.mode,
            parking: req.parking.clone(),
            food: req.food.clone(),
            confidence: score,
            purchase_date: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crowd::CrowdForecast;
    use crate::geo::Coordinate;
    use crate::routing::{CollaboratorError, DemoRouting};
    use crate::travel::TravelEstimate;
    use crate::venue::{CrowdLevel, Gate, Venue};
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone};

    fn sample_request() -> ScheduleRequest {
        let gate = |id: &str, ranges: &[&str]| Gate {
            id: id.into(),
            name: format!("Gate {}", id.to_uppercase()),
            location: Coordinate::new(40.8128, -74.0742),
            capacity: 12_000,
            recommended_for: ranges.iter().map(|r| r.to_string()).collect(),
            crowd_level: CrowdLevel::Moderate,
        };
        ScheduleRequest {
            event: Event {
                id: "m-104".into(),
                home_team: "Argentina".into(),
                away_team: "France".into(),
                venue: Venue {
                    id: "metlife".into(),
                    name: "MetLife Stadium".into(),
                    location: Coordinate::new(40.8128, -74.0742),
                    capacity: 82_500,
                    gates: vec![gate("a", &["101-120"]), gate("b", &["121-140"])],
                },
                kickoff: Utc.with_ymd_and_hms(2026, 7, 19, 20, 0, 0).unwrap(),
            },
            origin: UserLocation::new("Downtown hotel", Coordinate::new(40.7549, -73.9840)),
            section: Some("118".into()),
            preference: ArrivalPreference::Balanced,
            mode: TransportationMode::PublicTransit,
            parking: None,
            food: None,
        }
    }

    #[tokio::test]
    async fn demo_generation_produces_valid_schedule() {
        let assembler = ScheduleAssembler::new(DemoRouting::new());
        let req = sample_request();
        let schedule = assembler.generate_schedule(&req).await.unwrap();

        assert!(schedule.is_chronological());
        assert!((60u8..=100).contains(&schedule.confidence));
        assert_eq!(schedule.gate.id, "a");
        assert_eq!(schedule.event.id, "m-104");
        assert!(schedule.departure_time().unwrap() < schedule.event.kickoff);
    }

    struct UnavailableRouting;

    #[async_trait]
    impl RoutingCollaborator for UnavailableRouting {
        async fn travel_estimate(
            &self,
            _origin: Coordinate,
            _destination: Coordinate,
            _departing: DateTime<Utc>,
            _mode: TransportationMode,
        ) -> Result<TravelEstimate, CollaboratorError> {
            Err(CollaboratorError::Status {
                endpoint: "api/travel-time".into(),
                status: 503,
            })
        }

        async fn crowd_forecast(
            &self,
            _venue: &Venue,
            _at: DateTime<Utc>,
        ) -> Result<CrowdForecast, CollaboratorError> {
            Err(CollaboratorError::Status {
                endpoint: "api/crowds/metlife".into(),
                status: 503,
            })
        }
    }

    #[tokio::test]
    async fn collaborator_failure_is_surfaced_not_swallowed() {
        let assembler = ScheduleAssembler::new(UnavailableRouting);
        let err = assembler
            .generate_schedule(&sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, ScheduleError::RoutingUnavailable(_)));
    }

    #[tokio::test]
    async fn venue_without_gates_is_fatal() {
        let mut req = sample_request();
        req.event.venue.gates.clear();
        let assembler = ScheduleAssembler::new(DemoRouting::new());
        let err = assembler.generate_schedule(&req).await.unwrap_err();
        assert!(matches!(err, ScheduleError::NoGateAvailable { .. }));
    }
}

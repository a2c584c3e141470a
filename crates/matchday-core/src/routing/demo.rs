//! Deterministic demo data source.
//!
//! Computes travel estimates from straight-line distance and mode speed,
//! and crowd forecasts from the hour of day. Same inputs, same outputs --
//! useful offline and in tests. Selecting this over [`BackendRouting`] is
//! always an explicit caller decision.
//!
//! [`BackendRouting`]: super::BackendRouting

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Timelike, Utc};

use super::{CollaboratorError, RoutingCollaborator};
use crate::crowd::{CrowdForecast, CrowdIntensity, ParkingAvailability, WaitEstimates};
use crate::geo::Coordinate;
use crate::travel::{TrafficLevel, TransportationMode, TravelEstimate};
use crate::venue::{CrowdLevel, Venue};

/// Offline stand-in for the live routing backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoRouting;

impl DemoRouting {
    pub fn new() -> Self {
        Self
    }
}

/// Expected venue occupancy by hour of day (0-100).
fn crowd_percentage_for_hour(hour: u32) -> u8 {
    match hour {
        8..=11 => 25,
        12..=15 => 55,
        16..=19 => 85,
        _ => 15,
    }
}

/// Per-gate level derived from an effective occupancy percentage.
fn gate_level(pct: u8) -> CrowdLevel {
    match pct {
        0..=29 => CrowdLevel::Clear,
        30..=54 => CrowdLevel::Moderate,
        55..=79 => CrowdLevel::Crowded,
        _ => CrowdLevel::Avoid,
    }
}

#[async_trait]
impl RoutingCollaborator for DemoRouting {
    async fn travel_estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        departing: DateTime<Utc>,
        mode: TransportationMode,
    ) -> Result<TravelEstimate, CollaboratorError> {
        let distance = origin.distance_miles(destination);

        let (mph, delay_share): (f64, f64) = match mode {
            TransportationMode::Driving | TransportationMode::Rideshare => (30.0, 0.25),
            TransportationMode::PublicTransit => (20.0, 0.10),
            TransportationMode::Walking => (3.0, 0.0),
        };

        let base = ((distance / mph) * 60.0).round().max(5.0) as i64;

        // Rush hours carry the full delay share; off-peak a fraction.
        let peak = matches!(departing.hour(), 7..=9 | 15..=19);
        let share = if peak { delay_share } else { delay_share * 0.4 };
        let delay = (base as f64 * share).round() as i64;

        let total = base + delay;
        let ratio = total as f64 / base as f64;

        Ok(TravelEstimate {
            travel_time_minutes: total,
            traffic_delay_minutes: delay,
            distance_miles: (distance * 10.0).round() / 10.0,
            mode,
            traffic_level: TrafficLevel::from_ratio(ratio),
        })
    }

    async fn crowd_forecast(
        &self,
        venue: &Venue,
        at: DateTime<Utc>,
    ) -> Result<CrowdForecast, CollaboratorError> {
        let pct = crowd_percentage_for_hour(at.hour());

        // Stagger gates so some are always better bets than others.
        let gate_levels: HashMap<String, CrowdLevel> = venue
            .gates
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let effective = pct.saturating_sub(i as u8 * 15);
                (g.id.clone(), gate_level(effective))
            })
            .collect();

        let mut ranked: Vec<&str> = venue.gates.iter().map(|g| g.id.as_str()).collect();
        ranked.sort_by_key(|id| gate_levels.get(*id).copied().unwrap_or(CrowdLevel::Avoid));

        Ok(CrowdForecast {
            overall_intensity: CrowdIntensity::from_percentage(pct),
            recommended_gates: ranked.into_iter().map(String::from).collect(),
            gate_levels,
            crowd_percentage: pct,
            peak_times: vec![
                "2 hours before kickoff".to_string(),
                "30 minutes before kickoff".to_string(),
            ],
            parking: if pct > 60 {
                ParkingAvailability::Limited
            } else {
                ParkingAvailability::Available
            },
            waits: WaitEstimates::from_percentage(pct),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::Gate;
    use chrono::TimeZone;

    fn venue() -> Venue {
        let gate = |id: &str| Gate {
            id: id.into(),
            name: format!("Gate {}", id.to_uppercase()),
            location: Coordinate::new(40.8128, -74.0742),
            capacity: 12_000,
            recommended_for: Vec::new(),
            crowd_level: CrowdLevel::Moderate,
        };
        Venue {
            id: "metlife".into(),
            name: "MetLife Stadium".into(),
            location: Coordinate::new(40.8128, -74.0742),
            capacity: 82_500,
            gates: vec![gate("a"), gate("b"), gate("c")],
        }
    }

    fn evening() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 19, 18, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn estimates_are_deterministic() {
        let demo = DemoRouting::new();
        let origin = Coordinate::new(40.7549, -73.9840);
        let dest = Coordinate::new(40.8128, -74.0742);

        let a = demo
            .travel_estimate(origin, dest, evening(), TransportationMode::Driving)
            .await
            .unwrap();
        let b = demo
            .travel_estimate(origin, dest, evening(), TransportationMode::Driving)
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn walking_has_no_traffic_delay() {
        let demo = DemoRouting::new();
        let est = demo
            .travel_estimate(
                Coordinate::new(40.80, -74.07),
                Coordinate::new(40.8128, -74.0742),
                evening(),
                TransportationMode::Walking,
            )
            .await
            .unwrap();
        assert_eq!(est.traffic_delay_minutes, 0);
        assert_eq!(est.traffic_level, TrafficLevel::Light);
    }

    #[tokio::test]
    async fn peak_driving_is_heavier_than_midnight() {
        let demo = DemoRouting::new();
        let origin = Coordinate::new(40.7549, -73.9840);
        let dest = Coordinate::new(40.8128, -74.0742);
        let midnight = Utc.with_ymd_and_hms(2026, 7, 19, 2, 0, 0).unwrap();

        let peak = demo
            .travel_estimate(origin, dest, evening(), TransportationMode::Driving)
            .await
            .unwrap();
        let quiet = demo
            .travel_estimate(origin, dest, midnight, TransportationMode::Driving)
            .await
            .unwrap();
        assert!(peak.traffic_delay_minutes > quiet.traffic_delay_minutes);
    }

    #[tokio::test]
    async fn evening_forecast_is_crowded_and_ranked() {
        let demo = DemoRouting::new();
        let forecast = demo.crowd_forecast(&venue(), evening()).await.unwrap();

        assert_eq!(forecast.crowd_percentage, 85);
        assert_eq!(forecast.overall_intensity, CrowdIntensity::Extreme);
        assert_eq!(forecast.parking, ParkingAvailability::Limited);
        assert_eq!(forecast.recommended_gates.len(), 3);

        // Ranking is least-crowded first.
        let levels: Vec<CrowdLevel> = forecast
            .recommended_gates
            .iter()
            .map(|id| forecast.gate_levels[id])
            .collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
    }

    #[tokio::test]
    async fn morning_forecast_is_light() {
        let demo = DemoRouting::new();
        let morning = Utc.with_ymd_and_hms(2026, 7, 19, 9, 0, 0).unwrap();
        let forecast = demo.crowd_forecast(&venue(), morning).await.unwrap();
        assert_eq!(forecast.crowd_percentage, 25);
        assert_eq!(forecast.overall_intensity, CrowdIntensity::Low);
        assert_eq!(forecast.parking, ParkingAvailability::Available);
    }
}

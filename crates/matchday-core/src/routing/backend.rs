//! Live routing backend client.
//!
//! Talks to the matchday backend's REST API (`/api/travel-time`,
//! `/api/crowds/{venue}`) and maps the wire payloads onto the core
//! models. Unknown or missing optional fields degrade to derived values
//! rather than erroring; a non-2xx status or transport failure surfaces
//! as [`CollaboratorError`].

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{CollaboratorError, RoutingCollaborator};
use crate::crowd::{CrowdForecast, CrowdIntensity, ParkingAvailability, WaitEstimates};
use crate::geo::Coordinate;
use crate::travel::{TrafficLevel, TransportationMode, TravelEstimate};
use crate::venue::{CrowdLevel, Venue};

/// HTTP client for the live routing/crowd backend.
#[derive(Debug, Clone)]
pub struct BackendRouting {
    base_url: Url,
    client: Client,
}

impl BackendRouting {
    /// # Errors
    /// [`CollaboratorError::BadUrl`] when `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, CollaboratorError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[derive(Debug, Deserialize)]
struct TravelTimeResponse {
    duration_minutes: i64,
    #[serde(default)]
    duration_in_traffic_minutes: Option<i64>,
    #[serde(default)]
    traffic_delay_minutes: Option<i64>,
    distance_miles: f64,
    #[serde(default)]
    traffic_level: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaitTimesWire {
    security: u32,
    concessions: u32,
    restrooms: u32,
}

#[derive(Debug, Deserialize)]
struct CrowdResponse {
    crowd_percentage: u8,
    #[serde(default)]
    gates: HashMap<String, String>,
    #[serde(default)]
    recommended_gates: Vec<String>,
    #[serde(default)]
    peak_times: Vec<String>,
    #[serde(default)]
    parking_availability: Option<String>,
    #[serde(default)]
    estimated_wait_minutes: Option<WaitTimesWire>,
}

fn parse_crowd_level(s: &str) -> Option<CrowdLevel> {
    match s {
        "clear" => Some(CrowdLevel::Clear),
        "moderate" => Some(CrowdLevel::Moderate),
        "crowded" => Some(CrowdLevel::Crowded),
        "avoid" => Some(CrowdLevel::Avoid),
        _ => None,
    }
}

fn parse_traffic_level(s: &str) -> Option<TrafficLevel> {
    match s {
        "light" => Some(TrafficLevel::Light),
        "moderate" => Some(TrafficLevel::Moderate),
        "heavy" => Some(TrafficLevel::Heavy),
        _ => None,
    }
}

#[async_trait]
impl RoutingCollaborator for BackendRouting {
    async fn travel_estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        departing: DateTime<Utc>,
        mode: TransportationMode,
    ) -> Result<TravelEstimate, CollaboratorError> {
        let url = self.base_url.join("api/travel-time")?;
        let resp = self
            .client
            .get(url)
            .query(&[
                ("origin_lat", origin.latitude.to_string()),
                ("origin_lon", origin.longitude.to_string()),
                ("dest_lat", destination.latitude.to_string()),
                ("dest_lon", destination.longitude.to_string()),
                ("mode", mode.as_str().to_string()),
                ("departing", departing.to_rfc3339()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CollaboratorError::Status {
                endpoint: "api/travel-time".to_string(),
                status: resp.status().as_u16(),
            });
        }

        let wire: TravelTimeResponse = resp.json().await?;

        let in_traffic = wire
            .duration_in_traffic_minutes
            .unwrap_or(wire.duration_minutes);
        let delay = wire
            .traffic_delay_minutes
            .unwrap_or((in_traffic - wire.duration_minutes).max(0));
        let level = wire
            .traffic_level
            .as_deref()
            .and_then(parse_traffic_level)
            .unwrap_or_else(|| {
                let base = wire.duration_minutes.max(1) as f64;
                TrafficLevel::from_ratio(in_traffic as f64 / base)
            });

        Ok(TravelEstimate {
            travel_time_minutes: in_traffic,
            traffic_delay_minutes: delay,
            distance_miles: wire.distance_miles,
            mode,
            traffic_level: level,
        })
    }

    async fn crowd_forecast(
        &self,
        venue: &Venue,
        at: DateTime<Utc>,
    ) -> Result<CrowdForecast, CollaboratorError> {
        let url = self.base_url.join(&format!("api/crowds/{}", venue.id))?;
        let resp = self
            .client
            .get(url)
            .query(&[("at", at.to_rfc3339())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CollaboratorError::Status {
                endpoint: format!("api/crowds/{}", venue.id),
                status: resp.status().as_u16(),
            });
        }

        let wire: CrowdResponse = resp.json().await?;

        // Unrecognized per-gate levels are dropped; such gates fall back
        // to their static level downstream.
        let gate_levels: HashMap<String, CrowdLevel> = wire
            .gates
            .iter()
            .filter_map(|(id, level)| parse_crowd_level(level).map(|l| (id.clone(), l)))
            .collect();

        let recommended_gates = if wire.recommended_gates.is_empty() {
            let mut ids: Vec<&str> = venue.gates.iter().map(|g| g.id.as_str()).collect();
            ids.sort_by_key(|id| {
                gate_levels.get(*id).copied().unwrap_or_else(|| {
                    venue
                        .gates
                        .iter()
                        .find(|g| g.id == *id)
                        .map(|g| g.crowd_level)
                        .unwrap_or(CrowdLevel::Avoid)
                })
            });
            ids.into_iter().map(String::from).collect()
        } else {
            wire.recommended_gates
        };

        let waits = wire
            .estimated_wait_minutes
            .map(|w| WaitEstimates {
                security_min: w.security,
                concessions_min: w.concessions,
                restrooms_min: w.restrooms,
            })
            .unwrap_or_else(|| WaitEstimates::from_percentage(wire.crowd_percentage));

        Ok(CrowdForecast {
            gate_levels,
            overall_intensity: CrowdIntensity::from_percentage(wire.crowd_percentage),
            recommended_gates,
            crowd_percentage: wire.crowd_percentage,
            peak_times: wire.peak_times,
            parking: match wire.parking_availability.as_deref() {
                Some("limited") => ParkingAvailability::Limited,
                _ => ParkingAvailability::Available,
            },
            waits,
        })
    }
}

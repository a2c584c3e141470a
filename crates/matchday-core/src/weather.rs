//! Venue weather lookup.
//!
//! Not part of schedule assembly -- a standalone query the caller can
//! show alongside a plan. Same live/demo strategy split as the routing
//! collaborator.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::routing::CollaboratorError;
use crate::venue::Venue;

/// Conditions at the venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_f: i32,
    pub condition: String,
    pub description: String,
    pub precipitation_chance: u8,
    pub humidity: u8,
    pub wind_speed_mph: i32,
    pub feels_like_f: i32,
}

/// External source of venue weather.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, venue: &Venue) -> Result<WeatherReport, CollaboratorError>;
}

/// HTTP client for the backend's weather endpoint.
#[derive(Debug, Clone)]
pub struct BackendWeather {
    base_url: Url,
    client: Client,
}

impl BackendWeather {
    /// # Errors
    /// [`CollaboratorError::BadUrl`] when `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, CollaboratorError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Client::new(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WeatherWire {
    temperature: i32,
    condition: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    precipitation_chance: u8,
    #[serde(default)]
    humidity: u8,
    #[serde(default)]
    wind_speed: i32,
    #[serde(default)]
    feels_like: Option<i32>,
}

#[async_trait]
impl WeatherProvider for BackendWeather {
    async fn current(&self, venue: &Venue) -> Result<WeatherReport, CollaboratorError> {
        let url = self.base_url.join(&format!("api/weather/{}", venue.id))?;
        let resp = self.client.get(url).send().await?;

        if !resp.status().is_success() {
            return Err(CollaboratorError::Status {
                endpoint: format!("api/weather/{}", venue.id),
                status: resp.status().as_u16(),
            });
        }

        let wire: WeatherWire = resp.json().await?;
        Ok(WeatherReport {
            temperature_f: wire.temperature,
            feels_like_f: wire.feels_like.unwrap_or(wire.temperature),
            condition: wire.condition,
            description: wire.description,
            precipitation_chance: wire.precipitation_chance,
            humidity: wire.humidity,
            wind_speed_mph: wire.wind_speed,
        })
    }
}

/// Fixed fair-weather report for offline use.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoWeather;

impl DemoWeather {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WeatherProvider for DemoWeather {
    async fn current(&self, _venue: &Venue) -> Result<WeatherReport, CollaboratorError> {
        Ok(WeatherReport {
            temperature_f: 72,
            condition: "Partly Cloudy".to_string(),
            description: "partly cloudy".to_string(),
            precipitation_chance: 20,
            humidity: 65,
            wind_speed_mph: 8,
            feels_like_f: 70,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    #[tokio::test]
    async fn demo_weather_is_stable() {
        let venue = Venue {
            id: "metlife".into(),
            name: "MetLife Stadium".into(),
            location: Coordinate::new(40.8128, -74.0742),
            capacity: 82_500,
            gates: Vec::new(),
        };
        let a = DemoWeather::new().current(&venue).await.unwrap();
        let b = DemoWeather::new().current(&venue).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.temperature_f, 72);
    }
}

//! The routing/crowd collaborator boundary.
//!
//! The engine's single I/O seam. Two implementations: [`BackendRouting`]
//! talks to the live backend over HTTP, [`DemoRouting`] computes
//! deterministic estimates locally. Which one to use is an explicit
//! choice made by the caller -- the assembler never falls back from one
//! to the other on its own.
//!
//! Both implementations are plain futures: dropping a pending call
//! cancels the underlying work, which is how caller cancellation
//! propagates. Retries and timeouts are the caller's concern.

mod backend;
mod demo;

pub use backend::BackendRouting;
pub use demo::DemoRouting;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::crowd::CrowdForecast;
use crate::geo::Coordinate;
use crate::travel::{TransportationMode, TravelEstimate};
use crate::venue::Venue;

/// Failures at the collaborator boundary. The assembler surfaces these
/// verbatim so the caller can retry, switch data source, or report.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("routing backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing backend returned status {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("invalid routing backend URL: {0}")]
    BadUrl(#[from] url::ParseError),
}

/// External source of travel estimates and crowd forecasts.
#[async_trait]
pub trait RoutingCollaborator: Send + Sync {
    /// Estimate travel from `origin` to `destination` around `departing`.
    async fn travel_estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        departing: DateTime<Utc>,
        mode: TransportationMode,
    ) -> Result<TravelEstimate, CollaboratorError>;

    /// Forecast venue crowding at instant `at`.
    async fn crowd_forecast(
        &self,
        venue: &Venue,
        at: DateTime<Utc>,
    ) -> Result<CrowdForecast, CollaboratorError>;
}

//! # Matchday Core Library
//!
//! Core business logic for Matchday, a spectator arrival planner: given a
//! fixture with a fixed kickoff, it produces an ordered sequence of timed
//! action steps ("Leave", "Travel", "Park", "Enter", "Find your seat")
//! and a confidence score for on-time arrival.
//!
//! ## Architecture
//!
//! - **Timeline engine**: pure, synchronous step construction anchored
//!   backward from kickoff
//! - **Gate selection & confidence scoring**: stateless pure functions
//!   over venue reference data and a crowd forecast
//! - **Routing collaborators**: the single I/O seam -- a live HTTP
//!   backend client and a deterministic demo source, chosen explicitly
//!   by the caller
//! - **Storage**: SQLite schedule store and TOML configuration
//!
//! ## Key Components
//!
//! - [`ScheduleAssembler`]: orchestrates fetch, selection, building, and
//!   scoring into an immutable [`Schedule`]
//! - [`TimelineBuilder`]: the step-construction engine
//! - [`RoutingCollaborator`]: the external data boundary
//! - [`ScheduleStore`]: keyed persistence for generated schedules

pub mod assembler;
pub mod confidence;
pub mod crowd;
pub mod error;
pub mod event;
pub mod gate_selector;
pub mod geo;
pub mod preference;
pub mod routing;
pub mod schedule;
pub mod storage;
pub mod timeline;
pub mod travel;
pub mod venue;
pub mod weather;

pub use assembler::{ScheduleAssembler, ScheduleRequest};
pub use crowd::{CrowdForecast, CrowdIntensity, ParkingAvailability, WaitEstimates};
pub use error::{ConfigError, CoreError, ScheduleError, StoreError};
pub use event::Event;
pub use gate_selector::{estimated_walk_minutes, is_section_in_range, select_gate, GateChoice};
pub use geo::{Coordinate, UserLocation};
pub use preference::ArrivalPreference;
pub use routing::{BackendRouting, CollaboratorError, DemoRouting, RoutingCollaborator};
pub use schedule::Schedule;
pub use storage::{Config, ScheduleStore, StoredScheduleSummary};
pub use timeline::{ScheduleStep, StepType, TimelineBuilder, TimelineRequest, TrafficNote};
pub use travel::{
    FoodOrder, ParkingReservation, TrafficLevel, TransportationMode, TravelEstimate,
};
pub use venue::{CrowdLevel, Gate, Venue};
pub use weather::{BackendWeather, DemoWeather, WeatherProvider, WeatherReport};

//! Timeline construction: ordered, timed action steps anchored to kickoff.

mod builder;
mod step;

pub use builder::{TimelineBuilder, TimelineRequest, TrafficNote};
pub use step::{ScheduleStep, StepType};

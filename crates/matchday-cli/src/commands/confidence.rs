use clap::{Args, ValueEnum};

use matchday_core::confidence;
use matchday_core::{CrowdIntensity, CrowdLevel};

use super::common::PreferenceArg;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GateCrowdArg {
    Clear,
    Moderate,
    Crowded,
    Avoid,
}

impl From<GateCrowdArg> for CrowdLevel {
    fn from(value: GateCrowdArg) -> Self {
        match value {
            GateCrowdArg::Clear => CrowdLevel::Clear,
            GateCrowdArg::Moderate => CrowdLevel::Moderate,
            GateCrowdArg::Crowded => CrowdLevel::Crowded,
            GateCrowdArg::Avoid => CrowdLevel::Avoid,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IntensityArg {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl From<IntensityArg> for CrowdIntensity {
    fn from(value: IntensityArg) -> Self {
        match value {
            IntensityArg::Low => CrowdIntensity::Low,
            IntensityArg::Moderate => CrowdIntensity::Moderate,
            IntensityArg::High => CrowdIntensity::High,
            IntensityArg::VeryHigh => CrowdIntensity::VeryHigh,
            IntensityArg::Extreme => CrowdIntensity::Extreme,
        }
    }
}

#[derive(Args)]
pub struct ConfidenceArgs {
    /// Crowd level at the chosen gate
    #[arg(long, value_enum, default_value = "clear")]
    pub gate_crowd: GateCrowdArg,

    /// Venue-wide crowd intensity
    #[arg(long, value_enum, default_value = "low")]
    pub intensity: IntensityArg,

    /// Traffic delay in minutes
    #[arg(long, default_value_t = 0)]
    pub delay: i64,

    /// Arrival preference
    #[arg(long, value_enum, default_value = "balanced")]
    pub preference: PreferenceArg,

    /// Print the full breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ConfidenceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let breakdown = confidence::breakdown(
        args.gate_crowd.into(),
        args.intensity.into(),
        args.delay,
        args.preference.into(),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("confidence: {}/100", breakdown.score);
        println!(
            "gate -{}, venue -{}, traffic -{}, preference +{}",
            breakdown.gate_crowd_penalty,
            breakdown.venue_intensity_penalty,
            breakdown.traffic_penalty,
            breakdown.preference_bonus
        );
    }
    Ok(())
}

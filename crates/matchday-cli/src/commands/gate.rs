use clap::Args;
use chrono::Utc;
use tokio::runtime::Runtime;

use matchday_core::{estimated_walk_minutes, select_gate, DemoRouting, RoutingCollaborator};

use super::common;

#[derive(Args)]
pub struct GateArgs {
    /// Ticket section to find a gate for
    pub section: Option<String>,

    /// Ignore the demo crowd forecast
    #[arg(long)]
    pub no_forecast: bool,
}

pub fn run(args: GateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let venue = common::sample_venue();

    let forecast = if args.no_forecast {
        None
    } else {
        let rt = Runtime::new()?;
        Some(rt.block_on(DemoRouting::new().crowd_forecast(&venue, Utc::now()))?)
    };

    let choice = select_gate(args.section.as_deref(), &venue, forecast.as_ref())?;
    println!("{} -- {}", choice.gate.name, choice.reason);

    if let Some(section) = args.section.as_deref() {
        println!(
            "about {} min from the gate to section {section}",
            estimated_walk_minutes(section)
        );
    }
    Ok(())
}

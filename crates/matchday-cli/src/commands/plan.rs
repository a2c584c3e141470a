use clap::Args;
use tokio::runtime::Runtime;

use matchday_core::{
    BackendRouting, Config, FoodOrder, ParkingReservation, Schedule, ScheduleAssembler,
    ScheduleRequest, ScheduleStore,
};

use super::common::{self, ModeArg, PreferenceArg};

#[derive(Args)]
pub struct PlanArgs {
    /// Ticket section (e.g. 118)
    #[arg(long)]
    pub section: Option<String>,

    /// Arrival preference
    #[arg(long, value_enum)]
    pub preference: Option<PreferenceArg>,

    /// Transportation mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Kickoff instant (RFC3339); defaults to a few hours from now
    #[arg(long)]
    pub kickoff: Option<String>,

    /// Parking reservation as JSON
    #[arg(long)]
    pub parking: Option<String>,

    /// Food order as JSON
    #[arg(long)]
    pub food: Option<String>,

    /// Use the live routing backend instead of demo data
    #[arg(long)]
    pub live: bool,

    /// Override the configured backend URL
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Save the generated schedule to the local store
    #[arg(long)]
    pub save: bool,

    /// Print the schedule as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    let preference = args
        .preference
        .map(Into::into)
        .unwrap_or(config.planning.preference);
    let mode = args.mode.map(Into::into).unwrap_or(config.planning.mode);
    let kickoff = common::parse_kickoff(args.kickoff.as_deref())?;

    let parking: Option<ParkingReservation> = args
        .parking
        .as_deref()
        .map(serde_json::from_str)
        .transpose()?;
    let food: Option<FoodOrder> = args.food.as_deref().map(serde_json::from_str).transpose()?;

    let request = ScheduleRequest {
        event: common::sample_event(kickoff),
        origin: config.home.clone().unwrap_or_else(common::sample_origin),
        section: args.section,
        preference,
        mode,
        parking,
        food,
    };

    let rt = Runtime::new()?;
    let schedule: Schedule = if args.live {
        let url = args.backend_url.as_deref().unwrap_or(&config.backend_url);
        let routing = BackendRouting::new(url)?;
        rt.block_on(ScheduleAssembler::new(routing).generate_schedule(&request))?
    } else {
        rt.block_on(
            ScheduleAssembler::new(matchday_core::DemoRouting::new()).generate_schedule(&request),
        )?
    };

    if args.save {
        let store = ScheduleStore::open()?;
        store.save(&schedule)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    print_schedule(&schedule);
    if args.save {
        println!("\nsaved as {}", schedule.id);
    }
    Ok(())
}

fn print_schedule(schedule: &Schedule) {
    println!(
        "{} at {} -- kickoff {}",
        schedule.event.title(),
        schedule.event.venue.name,
        schedule.event.kickoff.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "gate: {} ({})",
        schedule.gate.name, schedule.gate_reason
    );
    println!("confidence: {}/100\n", schedule.confidence);

    for step in &schedule.steps {
        println!(
            "{}  {:<28} {:>3} min  {}",
            step.scheduled_time.format("%H:%M"),
            step.title,
            step.duration_min,
            step.description
        );
    }
}

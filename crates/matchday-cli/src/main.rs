use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "matchday-cli", version, about = "Matchday arrival planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an arrival schedule
    Plan(commands::plan::PlanArgs),
    /// Gate selection for a ticket section
    Gate(commands::gate::GateArgs),
    /// Compute an on-time-arrival confidence score
    Confidence(commands::confidence::ConfidenceArgs),
    /// Saved schedule management
    Schedules {
        #[command(subcommand)]
        action: commands::schedules::SchedulesAction,
    },
    /// Venue weather
    Weather(commands::weather::WeatherArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Gate(args) => commands::gate::run(args),
        Commands::Confidence(args) => commands::confidence::run(args),
        Commands::Schedules { action } => commands::schedules::run(action),
        Commands::Weather(args) => commands::weather::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

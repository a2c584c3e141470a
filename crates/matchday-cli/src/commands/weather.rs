use clap::Args;
use tokio::runtime::Runtime;

use matchday_core::{BackendWeather, Config, DemoWeather, WeatherProvider, WeatherReport};

use super::common;

#[derive(Args)]
pub struct WeatherArgs {
    /// Use the live backend instead of demo data
    #[arg(long)]
    pub live: bool,

    /// Override the configured backend URL
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: WeatherArgs) -> Result<(), Box<dyn std::error::Error>> {
    let venue = common::sample_venue();
    let rt = Runtime::new()?;

    let report: WeatherReport = if args.live {
        let config = Config::load_or_default();
        let url = args.backend_url.as_deref().unwrap_or(&config.backend_url);
        rt.block_on(BackendWeather::new(url)?.current(&venue))?
    } else {
        rt.block_on(DemoWeather::new().current(&venue))?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {}°F ({}), feels like {}°F",
            venue.name, report.temperature_f, report.description, report.feels_like_f
        );
        println!(
            "precipitation {}%, humidity {}%, wind {} mph",
            report.precipitation_chance, report.humidity, report.wind_speed_mph
        );
    }
    Ok(())
}

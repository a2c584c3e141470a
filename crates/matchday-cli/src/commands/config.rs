use clap::Subcommand;

use matchday_core::{Config, Coordinate, UserLocation};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default arrival preference (relaxed/balanced/efficient)
    SetPreference { value: String },
    /// Set the default transportation mode (driving/transit/rideshare/walking)
    SetMode { value: String },
    /// Set the live routing backend URL
    SetBackend { url: String },
    /// Set the home starting location
    SetHome {
        name: String,
        latitude: f64,
        longitude: f64,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetPreference { value } => {
            let preference = serde_json::from_value(serde_json::Value::String(value.clone()))
                .map_err(|_| format!("unknown preference '{value}'"))?;
            let mut config = Config::load_or_default();
            config.planning.preference = preference;
            config.save()?;
            println!("default preference set to {value}");
        }
        ConfigAction::SetMode { value } => {
            let wire = match value.as_str() {
                "transit" => "publicTransit".to_string(),
                other => other.to_string(),
            };
            let mode = serde_json::from_value(serde_json::Value::String(wire))
                .map_err(|_| format!("unknown mode '{value}'"))?;
            let mut config = Config::load_or_default();
            config.planning.mode = mode;
            config.save()?;
            println!("default mode set to {value}");
        }
        ConfigAction::SetBackend { url } => {
            let mut config = Config::load_or_default();
            config.backend_url = url.clone();
            config.save()?;
            println!("backend url set to {url}");
        }
        ConfigAction::SetHome {
            name,
            latitude,
            longitude,
        } => {
            let mut config = Config::load_or_default();
            config.home = Some(UserLocation::new(
                name.clone(),
                Coordinate::new(latitude, longitude),
            ));
            config.save()?;
            println!("home set to {name}");
        }
    }
    Ok(())
}

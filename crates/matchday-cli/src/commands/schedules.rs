use clap::Subcommand;

use matchday_core::ScheduleStore;

#[derive(Subcommand)]
pub enum SchedulesAction {
    /// List saved schedules
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one saved schedule as JSON
    Show {
        /// Schedule id
        id: String,
    },
    /// Delete a saved schedule
    Delete {
        /// Schedule id
        id: String,
    },
}

pub fn run(action: SchedulesAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ScheduleStore::open()?;
    match action {
        SchedulesAction::List { json } => {
            let summaries = store.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else if summaries.is_empty() {
                println!("no saved schedules");
            } else {
                for s in summaries {
                    println!(
                        "{}  {}  kickoff {}  confidence {}/100",
                        s.id,
                        s.event_title,
                        s.kickoff.format("%Y-%m-%d %H:%M UTC"),
                        s.confidence
                    );
                }
            }
        }
        SchedulesAction::Show { id } => {
            let schedule = store.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        SchedulesAction::Delete { id } => {
            store.delete(&id)?;
            println!("deleted {id}");
        }
    }
    Ok(())
}

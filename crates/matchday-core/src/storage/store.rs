//! SQLite-backed keyed store for generated schedules.
//!
//! A simple keyed store: the full [`Schedule`] is kept as a JSON blob,
//! with a few columns duplicated for listing without deserializing
//! everything. No durability guarantees.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::StoreError;
use crate::schedule::Schedule;

/// Listing row for a stored schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredScheduleSummary {
    pub id: String,
    pub event_title: String,
    pub kickoff: DateTime<Utc>,
    pub confidence: u8,
    pub created_at: DateTime<Utc>,
}

/// Keyed schedule storage.
pub struct ScheduleStore {
    conn: Connection,
}

impl ScheduleStore {
    /// Open the store at `~/.config/matchday/matchday.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// [`StoreError::OpenFailed`] when the database cannot be opened.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?
            .join("matchday.db");
        let conn = Connection::open(&path).map_err(|source| StoreError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: &std::path::Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (tests and throwaway runs).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS schedules (
                id          TEXT PRIMARY KEY,
                event_title TEXT NOT NULL,
                kickoff     TEXT NOT NULL,
                confidence  INTEGER NOT NULL,
                created_at  TEXT NOT NULL,
                payload     TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_schedules_kickoff ON schedules(kickoff);",
        )
    }

    /// Insert or replace a schedule, keyed by its id.
    pub fn save(&self, schedule: &Schedule) -> Result<(), StoreError> {
        let payload = serde_json::to_string(schedule)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO schedules
                 (id, event_title, kickoff, confidence, created_at, payload)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                schedule.id.to_string(),
                schedule.event.title(),
                schedule.event.kickoff.to_rfc3339(),
                schedule.confidence,
                schedule.purchase_date.to_rfc3339(),
                payload,
            ],
        )?;
        Ok(())
    }

    /// Fetch a schedule by id.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no row matches.
    pub fn get(&self, id: &str) -> Result<Schedule, StoreError> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM schedules WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    /// List stored schedules, soonest kickoff first.
    pub fn list(&self) -> Result<Vec<StoredScheduleSummary>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, event_title, kickoff, confidence, created_at
             FROM schedules ORDER BY kickoff ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, u8>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut summaries = Vec::new();
        for row in rows {
            let (id, event_title, kickoff, confidence, created_at) = row?;
            summaries.push(StoredScheduleSummary {
                id,
                event_title,
                kickoff: parse_rfc3339(&kickoff)?,
                confidence,
                created_at: parse_rfc3339(&created_at)?,
            });
        }
        Ok(summaries)
    }

    /// Delete a schedule by id.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when no row matches.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM schedules WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}

fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::QueryFailed(format!("bad timestamp '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::{ScheduleAssembler, ScheduleRequest};
    use crate::geo::{Coordinate, UserLocation};
    use crate::preference::ArrivalPreference;
    use crate::routing::DemoRouting;
    use crate::travel::TransportationMode;
    use crate::venue::{CrowdLevel, Gate, Venue};
    use crate::Event;
    use chrono::TimeZone;

    async fn sample_schedule() -> Schedule {
        let req = ScheduleRequest {
            event: Event {
                id: "m-104".into(),
                home_team: "Argentina".into(),
                away_team: "France".into(),
                venue: Venue {
                    id: "metlife".into(),
                    name: "MetLife Stadium".into(),
                    location: Coordinate::new(40.8128, -74.0742),
                    capacity: 82_500,
                    gates: vec![Gate {
                        id: "a".into(),
                        name: "Gate A".into(),
                        location: Coordinate::new(40.8128, -74.0742),
                        capacity: 12_000,
                        recommended_for: vec!["101-120".into()],
                        crowd_level: CrowdLevel::Moderate,
                    }],
                },
                kickoff: Utc.with_ymd_and_hms(2026, 7, 19, 20, 0, 0).unwrap(),
            },
            origin: UserLocation::new("Downtown hotel", Coordinate::new(40.7549, -73.9840)),
            section: Some("118".into()),
            preference: ArrivalPreference::Balanced,
            mode: TransportationMode::Driving,
            parking: None,
            food: None,
        };
        ScheduleAssembler::new(DemoRouting::new())
            .generate_schedule(&req)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn save_get_round_trip() {
        let store = ScheduleStore::open_memory().unwrap();
        let schedule = sample_schedule().await;

        store.save(&schedule).unwrap();
        let loaded = store.get(&schedule.id.to_string()).unwrap();
        assert_eq!(loaded, schedule);
    }

    #[tokio::test]
    async fn list_and_delete() {
        let store = ScheduleStore::open_memory().unwrap();
        let schedule = sample_schedule().await;
        store.save(&schedule).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].event_title, "Argentina vs France");
        assert_eq!(listed[0].confidence, schedule.confidence);

        store.delete(&schedule.id.to_string()).unwrap();
        assert!(store.list().unwrap().is_empty());

        let err = store.delete(&schedule.id.to_string()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = ScheduleStore::open_memory().unwrap();
        let err = store.get("nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}

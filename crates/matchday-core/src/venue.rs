//! Venue and gate reference data.
//!
//! Venues and their gates are long-lived reference data loaded once per
//! process; the planner only ever reads them.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Qualitative congestion at a single gate, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Clear,
    Moderate,
    Crowded,
    Avoid,
}

impl CrowdLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Moderate => "moderate",
            Self::Crowded => "crowded",
            Self::Avoid => "avoid",
        }
    }

    /// Short phrase for user-facing gate descriptions.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Moderate => "moderate crowds",
            Self::Crowded => "heavy crowds",
            Self::Avoid => "very heavy crowds",
        }
    }
}

/// A venue entry point serving one or more ticket-section ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub capacity: u32,
    /// Served section range-strings, e.g. `"101-120"` or `"118"`.
    #[serde(default)]
    pub recommended_for: Vec<String>,
    /// Static congestion level, used when no live forecast covers this gate.
    pub crowd_level: CrowdLevel,
}

/// A stadium with its ordered list of gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub capacity: u32,
    pub gates: Vec<Gate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crowd_level_ordering() {
        assert!(CrowdLevel::Clear < CrowdLevel::Moderate);
        assert!(CrowdLevel::Moderate < CrowdLevel::Crowded);
        assert!(CrowdLevel::Crowded < CrowdLevel::Avoid);
    }

    #[test]
    fn crowd_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CrowdLevel::Moderate).unwrap(),
            "\"moderate\""
        );
    }
}

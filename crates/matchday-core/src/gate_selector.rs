//! Gate selection for a ticket section under a crowd forecast.
//!
//! Pure logic, no I/O. Malformed section or range strings never error;
//! they simply fail to match.

use crate::crowd::CrowdForecast;
use crate::error::ScheduleError;
use crate::venue::{Gate, Venue};

/// The selector's pick plus a user-facing justification.
#[derive(Debug, Clone, PartialEq)]
pub struct GateChoice {
    pub gate: Gate,
    pub reason: String,
}

/// Whether `section` falls inside a served-section range-string.
///
/// A range is either an exact match (`"118" == "118"`) or a numeric
/// `"start-end"` span. Anything unparseable is a non-match.
pub fn is_section_in_range(section: &str, range: &str) -> bool {
    let section = section.trim();
    let range = range.trim();

    if section == range {
        return true;
    }

    let Some((lo, hi)) = range.split_once('-') else {
        return false;
    };

    match (
        lo.trim().parse::<u32>(),
        hi.trim().parse::<u32>(),
        section.parse::<u32>(),
    ) {
        (Ok(lo), Ok(hi), Ok(n)) => n >= lo && n <= hi,
        _ => false,
    }
}

/// Floor heuristic for the walk from a gate to a section.
///
/// `section / 100` gives a pseudo-level: level 1 is 3 minutes, level 2 is
/// 6, anything else 8; non-numeric sections default to 5. A placeholder,
/// not navigation data -- callers must not assume sub-minute accuracy.
pub fn estimated_walk_minutes(section: &str) -> i64 {
    match section.trim().parse::<u32>() {
        Ok(n) => match n / 100 {
            1 => 3,
            2 => 6,
            _ => 8,
        },
        Err(_) => 5,
    }
}

/// Pick the best gate for a section, preferring live forecast data.
///
/// With no section, the forecast's top recommendation wins (falling back
/// to the venue's first gate). With a section, gates serving it compete on
/// forecast crowd level, ties broken by gate order; if none serve it, the
/// no-section branch applies.
///
/// # Errors
/// [`ScheduleError::NoGateAvailable`] when the venue has zero gates.
pub fn select_gate(
    section: Option<&str>,
    venue: &Venue,
    forecast: Option<&CrowdForecast>,
) -> Result<GateChoice, ScheduleError> {
    let first = venue
        .gates
        .first()
        .ok_or_else(|| ScheduleError::NoGateAvailable {
            venue: venue.name.clone(),
        })?;

    let Some(section) = section else {
        return Ok(fallback_choice(venue, forecast, first));
    };

    let matching: Vec<&Gate> = venue
        .gates
        .iter()
        .filter(|g| {
            g.recommended_for
                .iter()
                .any(|range| is_section_in_range(section, range))
        })
        .collect();

    if matching.is_empty() {
        return Ok(fallback_choice(venue, forecast, first));
    }

    let choice = match forecast {
        Some(forecast) => {
            // min_by_key keeps the first of equal elements, so original
            // gate order breaks ties.
            let best = matching
                .iter()
                .min_by_key(|g| forecast.level_for(g))
                .copied()
                .unwrap_or(matching[0]);
            GateChoice {
                gate: best.clone(),
                reason: format!(
                    "Serves section {section}, currently {}",
                    forecast.level_for(best).phrase()
                ),
            }
        }
        None => GateChoice {
            gate: matching[0].clone(),
            reason: format!("Optimal entry point for section {section}"),
        },
    };

    Ok(choice)
}

fn fallback_choice(venue: &Venue, forecast: Option<&CrowdForecast>, first: &Gate) -> GateChoice {
    if let Some(forecast) = forecast {
        if let Some(gate) = forecast.top_recommended(venue) {
            return GateChoice {
                gate: gate.clone(),
                reason: format!(
                    "Least crowded entrance right now ({})",
                    forecast.level_for(gate).phrase()
                ),
            };
        }
    }
    GateChoice {
        gate: first.clone(),
        reason: "Main entrance".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crowd::{CrowdIntensity, ParkingAvailability, WaitEstimates};
    use crate::geo::Coordinate;
    use crate::venue::CrowdLevel;
    use std::collections::HashMap;

    fn gate(id: &str, ranges: &[&str], level: CrowdLevel) -> Gate {
        Gate {
            id: id.into(),
            name: format!("Gate {}", id.to_uppercase()),
            location: Coordinate::new(40.8128, -74.0742),
            capacity: 12_000,
            recommended_for: ranges.iter().map(|r| r.to_string()).collect(),
            crowd_level: level,
        }
    }

    fn venue(gates: Vec<Gate>) -> Venue {
        Venue {
            id: "metlife".into(),
            name: "MetLife Stadium".into(),
            location: Coordinate::new(40.8128, -74.0742),
            capacity: 82_500,
            gates,
        }
    }

    fn forecast_with(levels: &[(&str, CrowdLevel)], recommended: &[&str]) -> CrowdForecast {
        CrowdForecast {
            gate_levels: levels
                .iter()
                .map(|(id, l)| (id.to_string(), *l))
                .collect::<HashMap<_, _>>(),
            overall_intensity: CrowdIntensity::Moderate,
            recommended_gates: recommended.iter().map(|s| s.to_string()).collect(),
            crowd_percentage: 55,
            peak_times: Vec::new(),
            parking: ParkingAvailability::Available,
            waits: WaitEstimates::from_percentage(55),
        }
    }

    #[test]
    fn range_matching() {
        assert!(is_section_in_range("118", "101-120"));
        assert!(!is_section_in_range("150", "101-120"));
        assert!(is_section_in_range("118", "118"));
        assert!(!is_section_in_range("abc", "101-120"));
        assert!(is_section_in_range("101", "101-120"));
        assert!(is_section_in_range("120", "101-120"));
        assert!(!is_section_in_range("118", "garbage-range"));
        assert!(is_section_in_range("VIP", "VIP"));
    }

    #[test]
    fn walk_heuristic() {
        assert_eq!(estimated_walk_minutes("118"), 3);
        assert_eq!(estimated_walk_minutes("245"), 6);
        assert_eq!(estimated_walk_minutes("332"), 8);
        assert_eq!(estimated_walk_minutes("12"), 8);
        assert_eq!(estimated_walk_minutes("suite"), 5);
    }

    #[test]
    fn empty_venue_is_fatal() {
        let v = venue(Vec::new());
        let err = select_gate(Some("118"), &v, None).unwrap_err();
        assert!(matches!(err, ScheduleError::NoGateAvailable { .. }));
    }

    #[test]
    fn no_section_no_forecast_returns_first_gate() {
        let v = venue(vec![
            gate("a", &["101-120"], CrowdLevel::Moderate),
            gate("b", &["121-140"], CrowdLevel::Clear),
        ]);
        let choice = select_gate(None, &v, None).unwrap();
        assert_eq!(choice.gate.id, "a");
        assert_eq!(choice.reason, "Main entrance");
    }

    #[test]
    fn no_section_with_forecast_returns_top_recommendation() {
        let v = venue(vec![
            gate("a", &[], CrowdLevel::Crowded),
            gate("b", &[], CrowdLevel::Clear),
        ]);
        let f = forecast_with(&[("b", CrowdLevel::Clear)], &["b", "a"]);
        let choice = select_gate(None, &v, Some(&f)).unwrap();
        assert_eq!(choice.gate.id, "b");
    }

    #[test]
    fn exact_section_gate_with_clear_forecast_beats_range_gate() {
        let v = venue(vec![
            gate("range", &["101-120"], CrowdLevel::Moderate),
            gate("exact", &["118"], CrowdLevel::Clear),
        ]);
        let f = forecast_with(
            &[
                ("range", CrowdLevel::Moderate),
                ("exact", CrowdLevel::Clear),
            ],
            &["exact"],
        );
        let choice = select_gate(Some("118"), &v, Some(&f)).unwrap();
        assert_eq!(choice.gate.id, "exact");
        assert!(choice.reason.contains("118"));
        assert!(choice.reason.contains("clear"));
    }

    #[test]
    fn crowd_tie_keeps_original_gate_order() {
        let v = venue(vec![
            gate("a", &["101-120"], CrowdLevel::Moderate),
            gate("b", &["101-120"], CrowdLevel::Moderate),
        ]);
        let f = forecast_with(
            &[("a", CrowdLevel::Moderate), ("b", CrowdLevel::Moderate)],
            &[],
        );
        let choice = select_gate(Some("110"), &v, Some(&f)).unwrap();
        assert_eq!(choice.gate.id, "a");
    }

    #[test]
    fn unmatched_section_falls_back_to_no_section_branch() {
        let v = venue(vec![
            gate("a", &["101-120"], CrowdLevel::Moderate),
            gate("b", &["121-140"], CrowdLevel::Clear),
        ]);
        let f = forecast_with(&[("b", CrowdLevel::Clear)], &["b"]);
        let choice = select_gate(Some("999"), &v, Some(&f)).unwrap();
        assert_eq!(choice.gate.id, "b");

        let choice = select_gate(Some("999"), &v, None).unwrap();
        assert_eq!(choice.gate.id, "a");
        assert_eq!(choice.reason, "Main entrance");
    }

    #[test]
    fn matching_without_forecast_takes_first_match() {
        let v = venue(vec![
            gate("a", &["201-240"], CrowdLevel::Crowded),
            gate("b", &["101-120"], CrowdLevel::Crowded),
            gate("c", &["101-120"], CrowdLevel::Clear),
        ]);
        let choice = select_gate(Some("110"), &v, None).unwrap();
        assert_eq!(choice.gate.id, "b");
        assert!(choice.reason.contains("Optimal entry point"));
    }
}

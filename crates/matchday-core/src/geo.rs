//! Geographic coordinate type and the user's starting location.

use serde::{Deserialize, Serialize};

/// A WGS-84 geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine great-circle distance in miles.
    ///
    /// Accuracy is well within what city-scale travel estimation needs;
    /// sub-mile fidelity is not required anywhere in the planner.
    pub fn distance_miles(&self, other: Coordinate) -> f64 {
        const R_MILES: f64 = 3_958.8; // mean Earth radius

        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R_MILES * c
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Where the spectator starts their trip from.
///
/// The name is what timeline steps refer to ("Leave Downtown hotel");
/// the coordinate feeds the travel-time lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub name: String,
    pub coordinate: Coordinate,
}

impl UserLocation {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Coordinate::new(40.8128, -74.0742);
        assert!(p.distance_miles(p) < 1e-9);
    }

    #[test]
    fn manhattan_to_metlife_is_about_nine_miles() {
        // Midtown Manhattan to the Meadowlands.
        let midtown = Coordinate::new(40.7549, -73.9840);
        let metlife = Coordinate::new(40.8128, -74.0742);
        let d = midtown.distance_miles(metlife);
        assert!(d > 5.0 && d < 12.0, "got {d}");
    }
}

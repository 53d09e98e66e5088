//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// Geographic position on Earth's surface.
///
/// Well-formed values have latitude in [-90, 90] and longitude in
/// [-180, 180], east positive. Out-of-range input is a caller contract
/// violation; the computations built on this type stay total and simply
/// return whatever the trigonometry yields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoCoordinate {
    /// Coordinate at sea level.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m: 0.0,
        }
    }

    /// Coordinate with an explicit altitude.
    pub fn with_altitude(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Whether both components are inside their nominal ranges.
    pub fn is_well_formed(&self) -> bool {
        self.latitude_deg.abs() <= 90.0 && self.longitude_deg.abs() <= 180.0
    }
}

//! Great-circle bearing to the Kaaba.

use miqat_core::{GeoCoordinate, normalize_360};

/// The Kaaba, Makkah.
pub const KAABA: GeoCoordinate = GeoCoordinate {
    latitude_deg: 21.422487,
    longitude_deg: 39.826206,
    altitude_m: 0.0,
};

/// Initial great-circle course from the user's position to the Kaaba,
/// in degrees clockwise from true north, range [0, 360).
///
/// ```text
/// y = sin(dlon) * cos(lat2)
/// x = cos(lat1) * sin(lat2) - sin(lat1) * cos(lat2) * cos(dlon)
/// bearing = atan2(y, x)
/// ```
///
/// Total over well-formed coordinates: pure, stateless, idempotent.
/// At the Kaaba itself both arguments of `atan2` vanish and the result
/// is 0.0. At the poles the formula is numerically degenerate; a valid
/// fix is the caller's contract.
pub fn qibla_bearing(user: &GeoCoordinate) -> f64 {
    let phi1 = user.latitude_rad();
    let phi2 = KAABA.latitude_rad();
    let dlon = KAABA.longitude_rad() - user.longitude_rad();

    let y = dlon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();
    normalize_360(y.atan2(x).to_degrees())
}

//! Hour-angle solutions: when the Sun crosses a target altitude.
//!
//! The core relation is the spherical hour-angle formula
//!
//! ```text
//! cos H = (sin h - sin phi * sin delta) / (cos phi * cos delta)
//! ```
//!
//! where `h` is the target altitude, `phi` the observer latitude, and
//! `delta` the solar declination. `cos H` outside [-1, 1] means the Sun
//! never crosses that altitude during the day (polar cases). Event times
//! are refined by re-evaluating the Sun at the estimate, as the
//! declination drifts ~0.4 deg/day.

use chrono::NaiveDate;

use crate::position::{julian_day_0h, sun_position};

/// Altitude of the Sun's center at sunrise/sunset: -50 arcmin
/// (34' standard refraction plus 16' solar semidiameter).
pub const SUNRISE_SET_ALTITUDE_DEG: f64 = -50.0 / 60.0;

/// Refinement passes for event times.
const REFINE_PASSES: usize = 3;

/// Hour angle at which the Sun reaches a target altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngle {
    /// The crossing exists; hour angle in degrees, always positive.
    Deg(f64),
    /// The Sun stays below the target altitude all day.
    NeverReaches,
    /// The Sun stays above the target altitude all day.
    AlwaysAbove,
}

/// Result of solving for an altitude-crossing event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarEventResult {
    /// Event occurs at the given UTC hour of the date's solar day.
    /// May fall slightly outside [0, 24) for longitudes far from
    /// Greenwich; callers resolve it onto the local calendar.
    At(f64),
    /// The Sun never rises to the target altitude (e.g. polar night).
    NeverReaches,
    /// The Sun never descends to the target altitude (e.g. midnight
    /// sun, or summer nights too bright for astronomical twilight).
    AlwaysAbove,
}

/// Hour angle (degrees) at which the Sun sits at `altitude_deg`, for an
/// observer at `latitude_deg` with solar declination `declination_rad`.
pub fn hour_angle_deg(latitude_deg: f64, declination_rad: f64, altitude_deg: f64) -> HourAngle {
    let phi = latitude_deg.to_radians();
    let h = altitude_deg.to_radians();
    let cos_h = (h.sin() - phi.sin() * declination_rad.sin())
        / (phi.cos() * declination_rad.cos());
    if cos_h > 1.0 {
        return HourAngle::NeverReaches;
    }
    if cos_h < -1.0 {
        return HourAngle::AlwaysAbove;
    }
    HourAngle::Deg(cos_h.acos().to_degrees())
}

/// Altitude of the Sun when a vertical object's shadow equals
/// `shadow_factor` times its height plus the noon shadow.
///
/// `h = arctan(1 / (factor + tan|phi - delta|))`
pub fn shadow_altitude_deg(latitude_deg: f64, declination_rad: f64, shadow_factor: f64) -> f64 {
    let spread = (latitude_deg.to_radians() - declination_rad).abs();
    (1.0_f64).atan2(shadow_factor + spread.tan()).to_degrees()
}

/// Solar transit (local apparent noon) in UTC hours, iteratively refined.
pub fn transit_utc_hours(date: NaiveDate, longitude_deg: f64) -> f64 {
    let jd_0h = julian_day_0h(date);
    let mut utc_h = 12.0 - longitude_deg / 15.0;
    for _ in 0..REFINE_PASSES {
        let sun = sun_position(jd_0h + utc_h / 24.0);
        utc_h = 12.0 - longitude_deg / 15.0 - sun.equation_of_time_min / 60.0;
    }
    utc_h
}

/// UTC hour at which the Sun crosses `altitude_deg`, rising or setting,
/// for the given date and observer position.
pub fn event_utc_hours(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_deg: f64,
    rising: bool,
) -> SolarEventResult {
    let jd_0h = julian_day_0h(date);
    let mut utc_h = 12.0 - longitude_deg / 15.0;
    for _ in 0..REFINE_PASSES {
        let sun = sun_position(jd_0h + utc_h / 24.0);
        let transit = 12.0 - longitude_deg / 15.0 - sun.equation_of_time_min / 60.0;
        let ha = match hour_angle_deg(latitude_deg, sun.declination_rad, altitude_deg) {
            HourAngle::Deg(d) => d,
            HourAngle::NeverReaches => return SolarEventResult::NeverReaches,
            HourAngle::AlwaysAbove => return SolarEventResult::AlwaysAbove,
        };
        utc_h = if rising {
            transit - ha / 15.0
        } else {
            transit + ha / 15.0
        };
    }
    SolarEventResult::At(utc_h)
}

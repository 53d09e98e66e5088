//! Low-precision solar position: declination and equation of time.
//!
//! Truncated series from standard astronomical references (Meeus,
//! *Astronomical Algorithms*, ch. 25 "Solar Coordinates" and ch. 28
//! "Equation of Time"). Good to well under an arcminute of declination
//! and a few seconds of the equation of time over the current era,
//! which keeps wall-clock schedules accurate to the minute.

use chrono::{Datelike, NaiveDate};

/// Offset between chrono's day count from 0001-01-01 and the Julian Day
/// Number (e.g. 1970-01-01 is day 719163 and JDN 2440588).
const JDN_OFFSET: i64 = 1_721_425;

/// Julian Date at 00:00 UT of a calendar date.
pub fn julian_day_0h(date: NaiveDate) -> f64 {
    (i64::from(date.num_days_from_ce()) + JDN_OFFSET) as f64 - 0.5
}

/// Solar position quantities needed for wall-clock event computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Apparent declination in radians.
    pub declination_rad: f64,
    /// Equation of time in minutes (apparent minus mean solar time).
    pub equation_of_time_min: f64,
}

/// Compute apparent solar declination and the equation of time at a
/// Julian Date (UT is accurate enough here; the TT-UT offset shifts the
/// result by well under a second of event time).
pub fn sun_position(jd: f64) -> SunPosition {
    let t = (jd - 2_451_545.0) / 36_525.0;

    // Geometric mean longitude and mean anomaly of the Sun.
    let l0 = (280.46646 + 36_000.76983 * t + 0.000_3032 * t * t).rem_euclid(360.0);
    let m = (357.52911 + 35_999.05029 * t - 0.000_1537 * t * t).to_radians();

    // Eccentricity of Earth's orbit.
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    // Equation of center.
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    // Apparent longitude: true longitude corrected for aberration and
    // the leading nutation term.
    let true_long = l0 + c;
    let omega = (125.04 - 1934.136 * t).to_radians();
    let lambda = (true_long - 0.005_69 - 0.004_78 * omega.sin()).to_radians();

    // Mean obliquity (IAU 1980 series, truncated) plus the nutation
    // correction matching the apparent longitude above.
    let eps0 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0
        - (46.8150 * t + 0.000_59 * t * t - 0.001_813 * t * t * t) / 3600.0;
    let eps = (eps0 + 0.002_56 * omega.cos()).to_radians();

    let declination_rad = (eps.sin() * lambda.sin()).asin();

    // Equation of time (Meeus 28.3), in minutes of time.
    let y = (eps / 2.0).tan().powi(2);
    let l0r = l0.to_radians();
    let equation_of_time_min = 4.0
        * (y * (2.0 * l0r).sin() - 2.0 * e * m.sin()
            + 4.0 * e * y * m.sin() * (2.0 * l0r).cos()
            - 0.5 * y * y * (4.0 * l0r).sin()
            - 1.25 * e * e * (2.0 * m).sin())
        .to_degrees();

    SunPosition {
        declination_rad,
        equation_of_time_min,
    }
}

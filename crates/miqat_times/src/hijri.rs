//! Civil tabular Hijri calendar.
//!
//! The arithmetical (tabular) Islamic calendar: 12 alternating 30/29-day
//! months, 11 leap years per 30-year cycle, epoch 1 Muharram 1 AH =
//! JDN 1948440 (Friday epoch, civil variant). Deterministic and
//! self-consistent, but a best-effort approximation of the observational
//! calendar — actual month starts depend on moon sighting and may differ
//! by a day or two. Display only; never a contract.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// JDN of 1 Muharram 1 AH (civil epoch).
const EPOCH_JDN: i64 = 1_948_440;

/// Offset between chrono's day count from 0001-01-01 and JDN.
const JDN_OFFSET: i64 = 1_721_425;

/// Hijri month names in order (index 0 = Muharram).
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// A date in the civil tabular Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i64,
    /// 1-12.
    pub month: u32,
    /// 1-30.
    pub day: u32,
}

/// Whether a Hijri year is a 355-day leap year in the 30-year cycle.
pub fn is_leap_year(year: i64) -> bool {
    (11 * year + 14).rem_euclid(30) < 11
}

/// Length of a Hijri month in days.
pub fn month_length(year: i64, month: u32) -> u32 {
    match month {
        12 => 29 + u32::from(is_leap_year(year)),
        m if m % 2 == 1 => 30,
        _ => 29,
    }
}

fn jdn_from_hijri(year: i64, month: u32, day: u32) -> i64 {
    let m = i64::from(month);
    i64::from(day) + (59 * (m - 1) + 1) / 2 + 354 * (year - 1) + (3 + 11 * year).div_euclid(30)
        + EPOCH_JDN
        - 1
}

impl HijriDate {
    /// Convert a Gregorian date at or after the epoch (622-07-19).
    ///
    /// Earlier dates are outside the calendar and return `None`.
    pub fn from_gregorian(date: NaiveDate) -> Option<Self> {
        let jdn = i64::from(date.num_days_from_ce()) + JDN_OFFSET;
        if jdn < EPOCH_JDN {
            return None;
        }
        let days = jdn - EPOCH_JDN;
        let year = (30 * days + 10_646) / 10_631;
        // First estimate of the month, then correct against exact
        // month starts (29-day floor can overshoot by one).
        let mut month = (((jdn - jdn_from_hijri(year, 1, 1)) / 29) + 1).min(12) as u32;
        while month > 1 && jdn_from_hijri(year, month, 1) > jdn {
            month -= 1;
        }
        while month < 12 && jdn_from_hijri(year, month + 1, 1) <= jdn {
            month += 1;
        }
        let day = (jdn - jdn_from_hijri(year, month, 1) + 1) as u32;
        Some(Self { year, month, day })
    }

    /// Convert back to a Gregorian date.
    pub fn to_gregorian(self) -> Option<NaiveDate> {
        let jdn = jdn_from_hijri(self.year, self.month, self.day);
        NaiveDate::from_num_days_from_ce_opt((jdn - JDN_OFFSET) as i32)
    }

    /// English month name.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) as usize) - 1]
    }

    /// Display label, e.g. "22 Safar 1448 AH".
    pub fn label(self) -> String {
        format!("{} {} {} AH", self.day, self.month_name(), self.year)
    }
}

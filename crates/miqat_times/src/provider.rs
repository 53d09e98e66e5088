//! Schedule provider seam.
//!
//! The screen layer consumes schedules through this trait so it can
//! tolerate absent or failing sources: no coordinate falls back to a
//! configured approximate location, and computation failure surfaces as
//! an error string on the outcome rather than a panic or a missing day.

use chrono::{FixedOffset, NaiveDate};
use tracing::{debug, warn};

use miqat_core::GeoCoordinate;

use crate::hijri::HijriDate;
use crate::method::{AsrJuristic, CalculationMethod};
use crate::schedule::compute_schedule;
use crate::types::PrayerSchedule;

/// What a schedule source hands the screen layer for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    /// The day's schedule, absent when computation failed.
    pub schedule: Option<PrayerSchedule>,
    /// Human-formatted Gregorian date, e.g. "Wednesday, 20 March 2024".
    pub date_label: String,
    /// Hijri date label, e.g. "10 Ramadan 1445 AH"; absent before the
    /// calendar epoch.
    pub hijri_label: Option<String>,
    /// Human-readable failure description, if any.
    pub error: Option<String>,
}

/// A source of daily schedules.
pub trait ScheduleProvider {
    /// Schedule for a date. `None` coordinate means the caller has no
    /// fix (permission denied, transient failure); providers fall back
    /// to an approximate location rather than failing.
    fn schedule_for(&self, coord: Option<&GeoCoordinate>, date: NaiveDate) -> ScheduleOutcome;
}

/// Provider computing schedules from solar geometry.
#[derive(Debug, Clone)]
pub struct ComputedScheduleProvider {
    pub method: CalculationMethod,
    pub asr: AsrJuristic,
    pub utc_offset: FixedOffset,
    /// Used when no coordinate is supplied.
    pub fallback_coord: GeoCoordinate,
}

impl ComputedScheduleProvider {
    pub fn new(
        method: CalculationMethod,
        asr: AsrJuristic,
        utc_offset: FixedOffset,
        fallback_coord: GeoCoordinate,
    ) -> Self {
        Self {
            method,
            asr,
            utc_offset,
            fallback_coord,
        }
    }
}

impl ScheduleProvider for ComputedScheduleProvider {
    fn schedule_for(&self, coord: Option<&GeoCoordinate>, date: NaiveDate) -> ScheduleOutcome {
        let effective = coord.unwrap_or(&self.fallback_coord);
        if coord.is_none() {
            debug!(
                lat = self.fallback_coord.latitude_deg,
                lon = self.fallback_coord.longitude_deg,
                "no location fix, using fallback coordinate"
            );
        }
        let date_label = date.format("%A, %-d %B %Y").to_string();
        let hijri_label = HijriDate::from_gregorian(date).map(HijriDate::label);
        match compute_schedule(effective, date, self.utc_offset, self.method, self.asr) {
            Ok(schedule) => ScheduleOutcome {
                schedule: Some(schedule),
                date_label,
                hijri_label,
                error: None,
            },
            Err(e) => {
                warn!(error = %e, %date, "schedule computation failed");
                ScheduleOutcome {
                    schedule: None,
                    date_label,
                    hijri_label,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

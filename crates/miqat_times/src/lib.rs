//! Prayer schedule computation, next-prayer selection, and the Hijri
//! calendar.
//!
//! This crate provides:
//! - The `Prayer`/`PrayerEvent`/`PrayerSchedule` data model
//! - Named calculation methods (MWL, ISNA, Egyptian, Umm al-Qura,
//!   Karachi) and juristic Asr options
//! - Schedule computation from solar geometry with a middle-of-night
//!   high-latitude fallback
//! - Next-prayer selection with day wrap and "HH:MM" countdown
//! - The civil tabular Hijri calendar for date display
//! - The `ScheduleProvider` seam the screen layer consumes

pub mod error;
pub mod hijri;
pub mod method;
pub mod provider;
pub mod schedule;
pub mod selector;
pub mod types;

pub use error::TimesError;
pub use hijri::{HijriDate, MONTH_NAMES, is_leap_year, month_length};
pub use method::{AsrJuristic, CalculationMethod, HighLatitudeRule, IshaRule};
pub use provider::{ComputedScheduleProvider, ScheduleOutcome, ScheduleProvider};
pub use schedule::{approximate_night_length, compute_schedule};
pub use selector::{next_event, remaining, remaining_hhmm};
pub use types::{ALL_PRAYERS, Prayer, PrayerEvent, PrayerSchedule};

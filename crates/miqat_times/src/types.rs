//! Prayer identifiers, events, and the daily schedule.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use miqat_core::format_clock_12h;

/// The six daily schedule entries.
///
/// `Sunrise` is an informational marker (end of Fajr), not a prayer;
/// next-prayer selection skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// All six schedule entries in chronological order.
pub const ALL_PRAYERS: [Prayer; 6] = [
    Prayer::Fajr,
    Prayer::Sunrise,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    /// Arabic display name.
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Fajr => "الفجر",
            Self::Sunrise => "الشروق",
            Self::Dhuhr => "الظهر",
            Self::Asr => "العصر",
            Self::Maghrib => "المغرب",
            Self::Isha => "العشاء",
        }
    }

    /// Whether this entry is one of the five prayers.
    pub const fn is_prayer(self) -> bool {
        !matches!(self, Self::Sunrise)
    }
}

/// A single scheduled event: a prayer (or the sunrise marker) at a
/// wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrayerEvent {
    /// Which entry this is.
    pub prayer: Prayer,
    /// Wall-clock time in the schedule's local day.
    pub time: NaiveTime,
    /// Calendar-day override. `None` means "the schedule's own day";
    /// set when next-prayer selection wraps to tomorrow's Fajr.
    pub date: Option<NaiveDate>,
}

impl PrayerEvent {
    /// Event on the schedule's own day.
    pub fn new(prayer: Prayer, time: NaiveTime) -> Self {
        Self {
            prayer,
            time,
            date: None,
        }
    }

    /// The same event moved onto an explicit calendar day, clock time
    /// unchanged.
    pub fn on_date(self, date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..self
        }
    }

    /// 12-hour "h:mm AM/PM" rendering of the clock time.
    pub fn clock_12h(&self) -> String {
        format_clock_12h(self.time)
    }
}

/// A day's schedule: the six events ascending in time.
///
/// Recomputed once per day or on location change; read-only to
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    /// The local calendar day the schedule describes.
    pub date: NaiveDate,
    /// Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha, ascending in time.
    pub events: Vec<PrayerEvent>,
}

impl PrayerSchedule {
    /// Look up an event by prayer.
    pub fn event(&self, prayer: Prayer) -> Option<&PrayerEvent> {
        self.events.iter().find(|e| e.prayer == prayer)
    }

    /// Whether events are in strictly ascending clock order.
    pub fn is_ascending(&self) -> bool {
        self.events.windows(2).all(|w| w[0].time < w[1].time)
    }
}

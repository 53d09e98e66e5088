//! Next-prayer selection and countdown.
//!
//! Selection scans the day's events in ascending order, skipping the
//! sunrise marker, and picks the first one strictly after `now`. Once
//! every prayer has passed, "next" wraps to tomorrow's Fajr with its
//! date override advanced — the clock time is left untouched and the
//! countdown resolves it against the advanced day.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone};

use miqat_core::countdown_hhmm;

use crate::types::{Prayer, PrayerEvent};

/// Select the next upcoming prayer.
///
/// `events` must be the day's schedule in ascending clock order with
/// no date overrides set; `today` is the schedule's calendar day and
/// `now` the current instant in the schedule's timezone. Exactly one
/// event is "next" at any instant.
pub fn next_event<Tz: TimeZone>(
    events: &[PrayerEvent],
    today: NaiveDate,
    now: &DateTime<Tz>,
) -> Option<PrayerEvent> {
    let now_local = now.naive_local();
    for event in events {
        if !event.prayer.is_prayer() {
            continue;
        }
        let at = NaiveDateTime::new(event.date.unwrap_or(today), event.time);
        if at > now_local {
            return Some(*event);
        }
    }
    // All of today's prayers have passed: tomorrow's Fajr.
    let fajr = events.iter().find(|e| e.prayer == Prayer::Fajr)?;
    Some(fajr.on_date(today.succ_opt()?))
}

/// Forward duration from `now` to the target event, resolved onto its
/// calendar day (today, or its date override). Negative durations (a
/// race with the refresh tick) clamp to zero.
pub fn remaining<Tz: TimeZone>(
    target: &PrayerEvent,
    today: NaiveDate,
    now: &DateTime<Tz>,
) -> Duration {
    let at = NaiveDateTime::new(target.date.unwrap_or(today), target.time);
    let d = at - now.naive_local();
    if d < Duration::zero() { Duration::zero() } else { d }
}

/// Countdown to the target event as "HH:MM", clamped at "00:00".
pub fn remaining_hhmm<Tz: TimeZone>(
    target: &PrayerEvent,
    today: NaiveDate,
    now: &DateTime<Tz>,
) -> String {
    countdown_hhmm(remaining(target, today, now))
}

//! Prayer screen session.
//!
//! Owns the day's schedule outcome, the selected next prayer, and the
//! rendered countdown. Selection re-runs on schedule change or the
//! 1-second tick; the countdown re-renders on the 60-second tick and
//! immediately whenever the selection changes, so a fresh selection
//! never shows a stale countdown.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeZone};
use tracing::debug;

use miqat_core::GeoCoordinate;
use miqat_times::{PrayerEvent, ScheduleOutcome, ScheduleProvider, next_event, remaining_hhmm};

/// Cadence for re-running next-prayer selection.
pub const SELECTION_TICK: Duration = Duration::from_secs(1);

/// Cadence for re-rendering the countdown display.
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(60);

/// Screen-level prayer state, created on mount and dropped on unmount.
#[derive(Debug, Default)]
pub struct PrayerSession {
    today: Option<NaiveDate>,
    outcome: Option<ScheduleOutcome>,
    next: Option<PrayerEvent>,
    countdown: Option<String>,
}

impl PrayerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a day from the provider (on mount, midnight rollover, or a
    /// location change) and select immediately.
    pub fn load_day<Tz: TimeZone>(
        &mut self,
        provider: &dyn ScheduleProvider,
        coord: Option<&GeoCoordinate>,
        date: NaiveDate,
        now: &DateTime<Tz>,
    ) {
        self.outcome = Some(provider.schedule_for(coord, date));
        self.today = Some(date);
        self.next = None;
        self.countdown = None;
        self.refresh_selection(now);
    }

    /// Re-run next-prayer selection (1-second cadence). On a selection
    /// change the countdown is recomputed immediately; returns whether
    /// the selection changed.
    pub fn refresh_selection<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        let (Some(today), Some(outcome)) = (self.today, self.outcome.as_ref()) else {
            return false;
        };
        let Some(schedule) = outcome.schedule.as_ref() else {
            return false;
        };
        let selected = next_event(&schedule.events, today, now);
        if selected == self.next {
            return false;
        }
        debug!(next = ?selected.as_ref().map(|e| e.prayer.name()), "next prayer changed");
        self.next = selected;
        self.refresh_countdown(now);
        true
    }

    /// Re-render the countdown against the current selection
    /// (60-second cadence). Idempotent and safe to run redundantly.
    pub fn refresh_countdown<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        self.countdown = match (self.today, self.next.as_ref()) {
            (Some(today), Some(next)) => Some(remaining_hhmm(next, today, now)),
            _ => None,
        };
    }

    /// The selected next prayer, if a schedule is loaded.
    pub fn next(&self) -> Option<&PrayerEvent> {
        self.next.as_ref()
    }

    /// The rendered "HH:MM" countdown.
    pub fn countdown(&self) -> Option<&str> {
        self.countdown.as_deref()
    }

    /// Human-formatted Gregorian date label.
    pub fn date_label(&self) -> Option<&str> {
        self.outcome.as_ref().map(|o| o.date_label.as_str())
    }

    /// Hijri date label.
    pub fn hijri_label(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(|o| o.hijri_label.as_deref())
    }

    /// Provider failure description, if the day failed to load.
    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(|o| o.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use miqat_times::{AsrJuristic, CalculationMethod, ComputedScheduleProvider, Prayer};

    fn tz() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    fn provider() -> ComputedScheduleProvider {
        ComputedScheduleProvider::new(
            CalculationMethod::UmmAlQura,
            AsrJuristic::Standard,
            tz(),
            GeoCoordinate::new(21.4225, 39.8262),
        )
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn local(h: u32, m: u32) -> DateTime<FixedOffset> {
        day().and_hms_opt(h, m, 0)
            .unwrap()
            .and_local_timezone(tz())
            .unwrap()
    }

    #[test]
    fn load_selects_and_renders_immediately() {
        let mut s = PrayerSession::new();
        s.load_day(&provider(), None, day(), &local(13, 0));
        // Mecca: Asr ~15:28, about two and a half hours out.
        assert_eq!(s.next().unwrap().prayer, Prayer::Asr);
        let cd = s.countdown().unwrap();
        assert!(cd.starts_with("02:"), "countdown = {cd}");
        assert!(s.date_label().unwrap().contains("2024"));
        assert!(s.hijri_label().unwrap().ends_with("AH"));
        assert!(s.error().is_none());
    }

    #[test]
    fn selection_tick_advances_past_events() {
        let mut s = PrayerSession::new();
        s.load_day(&provider(), None, day(), &local(13, 0));
        assert_eq!(s.next().unwrap().prayer, Prayer::Asr);

        // Nothing changes a second later.
        assert!(!s.refresh_selection(&local(13, 1)));

        // After Asr passes, the 1 s tick flips to Maghrib and the
        // countdown updates immediately.
        assert!(s.refresh_selection(&local(15, 30)));
        assert_eq!(s.next().unwrap().prayer, Prayer::Maghrib);
        let cd = s.countdown().unwrap();
        assert!(cd.starts_with("02:"), "countdown = {cd}");
    }

    #[test]
    fn countdown_tick_rerenders() {
        let mut s = PrayerSession::new();
        s.load_day(&provider(), None, day(), &local(13, 0));
        let before = s.countdown().unwrap().to_string();
        s.refresh_countdown(&local(14, 0));
        let after = s.countdown().unwrap();
        assert_ne!(before, after, "countdown should shrink by an hour");
    }

    #[test]
    fn late_night_wraps_to_tomorrow() {
        let mut s = PrayerSession::new();
        s.load_day(&provider(), None, day(), &local(23, 0));
        let next = s.next().unwrap();
        assert_eq!(next.prayer, Prayer::Fajr);
        assert_eq!(next.date, Some(day().succ_opt().unwrap()));
    }

    #[test]
    fn failed_day_exposes_error_only() {
        let mut s = PrayerSession::new();
        let tromso = GeoCoordinate::new(69.65, 18.96);
        let midsummer = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let now = midsummer
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_local_timezone(tz())
            .unwrap();
        s.load_day(&provider(), Some(&tromso), midsummer, &now);
        assert!(s.error().is_some());
        assert!(s.next().is_none());
        assert!(s.countdown().is_none());
        // The date labels still render for the header row.
        assert!(s.date_label().is_some());
    }

    #[test]
    fn redundant_refreshes_are_idempotent() {
        let mut s = PrayerSession::new();
        s.load_day(&provider(), None, day(), &local(13, 0));
        let cd = s.countdown().unwrap().to_string();
        s.refresh_countdown(&local(13, 0));
        s.refresh_countdown(&local(13, 0));
        assert_eq!(s.countdown().unwrap(), cd);
    }
}

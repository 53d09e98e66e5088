//! 12-hour clock parsing/formatting and countdown rendering.

use chrono::{Duration, NaiveTime, Timelike};

use crate::error::CoreError;

/// Format a time as "h:mm AM/PM" (no leading zero on the hour).
pub fn format_clock_12h(time: NaiveTime) -> String {
    let (pm, hour12) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour12,
        time.minute(),
        if pm { "PM" } else { "AM" }
    )
}

/// Parse a "h:mm AM/PM" wall-clock string.
pub fn parse_clock_12h(s: &str) -> Result<NaiveTime, CoreError> {
    NaiveTime::parse_from_str(s.trim(), "%I:%M %p")
        .map_err(|e| CoreError::ClockParse(format!("{s:?}: {e}")))
}

/// Render a countdown duration as "HH:MM", floored to whole minutes.
///
/// Negative durations (the target just passed, a race with the refresh
/// tick) clamp to "00:00" rather than rendering a negative value.
pub fn countdown_hhmm(remaining: Duration) -> String {
    let total_min = remaining.num_minutes().max(0);
    format!("{:02}:{:02}", total_min / 60, total_min % 60)
}

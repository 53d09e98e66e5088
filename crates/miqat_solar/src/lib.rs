//! Solar position and altitude-event solutions.
//!
//! This crate provides:
//! - Low-precision solar declination and equation of time (Meeus series)
//! - Hour-angle solutions for the instant the Sun crosses a target
//!   altitude, with transit and polar degenerate cases
//!
//! Accuracy is on the order of seconds for the event times, which is far
//! inside the minute-level precision wall-clock schedules are rendered at.

pub mod events;
pub mod position;

pub use events::{
    HourAngle, SolarEventResult, event_utc_hours, hour_angle_deg, shadow_altitude_deg,
    transit_utc_hours, SUNRISE_SET_ALTITUDE_DEG,
};
pub use position::{SunPosition, julian_day_0h, sun_position};

//! Core types shared across the miqat workspace.
//!
//! This crate provides:
//! - Geographic coordinates with degree/radian accessors
//! - Angle normalization utilities
//! - 12-hour clock parsing/formatting and countdown rendering
//!
//! Everything here is pure and allocation-light; no I/O, no logging.

pub mod angle;
pub mod clock;
pub mod error;
pub mod geo;

pub use angle::{normalize_360, normalize_pm180, shortest_arc_deg};
pub use clock::{countdown_hhmm, format_clock_12h, parse_clock_12h};
pub use error::CoreError;
pub use geo::GeoCoordinate;

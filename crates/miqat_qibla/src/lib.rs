//! Qibla bearing and compass-needle smoothing.
//!
//! This crate provides:
//! - The great-circle bearing from a coordinate to the Kaaba
//! - Heading readings with the invalid-true-north sentinel and
//!   magnetic fallback
//! - A damped needle filter that tracks noisy headings continuously
//!   across the 0/360 boundary

pub mod bearing;
pub mod heading;
pub mod needle;

pub use bearing::{KAABA, qibla_bearing};
pub use heading::{HeadingReading, INVALID_HEADING};
pub use needle::{NeedleFilter, relative_bearing_deg};

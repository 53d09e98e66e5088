//! Compass heading readings.

use serde::{Deserialize, Serialize};

/// Sentinel emitted by platform sensors when the true-north heading
/// could not be determined (e.g. location services off).
pub const INVALID_HEADING: f64 = -1.0;

/// One compass reading from the platform sensor stream.
///
/// `true_deg` may carry [`INVALID_HEADING`]; consumers then fall back
/// to the magnetic reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingReading {
    /// Heading relative to true north, degrees clockwise, or the
    /// invalid sentinel.
    pub true_deg: f64,
    /// Heading relative to magnetic north, degrees clockwise.
    pub magnetic_deg: f64,
}

impl HeadingReading {
    /// Reading with a valid true-north heading.
    pub fn true_north(true_deg: f64, magnetic_deg: f64) -> Self {
        Self {
            true_deg,
            magnetic_deg,
        }
    }

    /// Reading where only the magnetic heading is usable.
    pub fn magnetic_only(magnetic_deg: f64) -> Self {
        Self {
            true_deg: INVALID_HEADING,
            magnetic_deg,
        }
    }

    /// The heading to display: true north when valid, magnetic
    /// otherwise.
    pub fn effective_deg(&self) -> f64 {
        if self.true_deg >= 0.0 {
            self.true_deg
        } else {
            self.magnetic_deg
        }
    }
}

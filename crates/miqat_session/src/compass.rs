//! Compass screen session.
//!
//! Owns the needle filter, the current bearing, and the heading
//! subscription. The subscription is acquired on focus and released on
//! blur or drop; the bearing stays unset until a location fix arrives,
//! and readings received without one are absorbed without output.

use tracing::debug;

use miqat_core::GeoCoordinate;
use miqat_qibla::{HeadingReading, NeedleFilter, qibla_bearing, relative_bearing_deg};

use crate::sensors::{HeadingProvider, HeadingSubscription, LocationProvider};

/// Default needle response time constant in seconds.
pub const NEEDLE_TIME_CONSTANT_S: f64 = 0.25;

/// Screen-level compass state, created on mount and dropped on
/// unmount.
#[derive(Debug)]
pub struct CompassSession {
    needle: NeedleFilter,
    location: Option<GeoCoordinate>,
    bearing_deg: Option<f64>,
    subscription: Option<HeadingSubscription>,
}

impl CompassSession {
    pub fn new() -> Self {
        Self::with_time_constant(NEEDLE_TIME_CONSTANT_S)
    }

    pub fn with_time_constant(time_constant_s: f64) -> Self {
        Self {
            needle: NeedleFilter::new(time_constant_s),
            location: None,
            bearing_deg: None,
            subscription: None,
        }
    }

    /// Acquire the heading stream and take a location fix. Idempotent:
    /// focusing an already-focused session keeps the one subscription.
    pub fn focus(&mut self, headings: &dyn HeadingProvider, location: &dyn LocationProvider) {
        if self.subscription.is_none() {
            self.subscription = Some(headings.subscribe());
        }
        self.set_location(location.current());
        debug!(bearing = ?self.bearing_deg, "compass focused");
    }

    /// Release the heading stream. The needle and bearing are kept so
    /// a refocus resumes without a visual reset.
    pub fn blur(&mut self) {
        self.subscription = None;
        debug!("compass blurred");
    }

    /// Whether the heading stream is held.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Update the location fix; recomputes the bearing, or clears it
    /// when the fix is lost.
    pub fn set_location(&mut self, location: Option<GeoCoordinate>) {
        self.location = location;
        self.bearing_deg = location.map(|c| qibla_bearing(&c));
    }

    /// Bearing to the Kaaba, unset while no fix is available.
    pub fn bearing_deg(&self) -> Option<f64> {
        self.bearing_deg
    }

    /// Consume one heading reading (`dt_s` seconds since the last) and
    /// return the damped needle rotation to render, or `None` while
    /// the bearing is unknown.
    pub fn on_reading(&mut self, reading: HeadingReading, dt_s: f64) -> Option<f64> {
        let bearing = self.bearing_deg?;
        let target = relative_bearing_deg(bearing, reading.effective_deg());
        Some(self.needle.update(target, dt_s))
    }

    /// Current needle display angle in [0, 360), if any reading has
    /// been consumed.
    pub fn needle_display_deg(&self) -> Option<f64> {
        self.needle.is_initialized().then(|| self.needle.display_deg())
    }
}

impl Default for CompassSession {
    fn default() -> Self {
        Self::new()
    }
}

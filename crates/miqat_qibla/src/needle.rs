//! Damped compass-needle tracking.
//!
//! Raw heading readings are noisy frame-to-frame; a needle that tracks
//! them directly jitters, and one that renders `target mod 360` snaps a
//! full turn when the relative bearing crosses north. The filter keeps
//! a continuous (unbounded) rotation, steers it toward the target along
//! the shortest arc, and approaches with a first-order time-constant
//! response so the display lags and settles.

use miqat_core::{normalize_360, shortest_arc_deg};

/// Needle rotation to render: where the target sits relative to the
/// device's nose, `bearing - heading`, in [0, 360).
pub fn relative_bearing_deg(bearing_deg: f64, heading_deg: f64) -> f64 {
    normalize_360(bearing_deg - heading_deg)
}

/// First-order damped tracker for a circular target angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleFilter {
    /// Response time constant in seconds; the displayed angle covers
    /// ~63% of a step per time constant.
    time_constant_s: f64,
    rotation_deg: f64,
    initialized: bool,
}

impl NeedleFilter {
    /// Filter with the given time constant. Non-positive constants
    /// degenerate to snapping directly to the target.
    pub fn new(time_constant_s: f64) -> Self {
        Self {
            time_constant_s,
            rotation_deg: 0.0,
            initialized: false,
        }
    }

    /// Feed a new target angle (degrees, any range) observed `dt_s`
    /// seconds after the previous update. Returns the continuous
    /// rotation to render.
    ///
    /// The first update snaps to the target: there is nothing to lag
    /// from, and easing in from an arbitrary zero would animate a
    /// sweep that never happened.
    pub fn update(&mut self, target_deg: f64, dt_s: f64) -> f64 {
        if !self.initialized {
            self.rotation_deg = normalize_360(target_deg);
            self.initialized = true;
            return self.rotation_deg;
        }
        if dt_s <= 0.0 {
            return self.rotation_deg;
        }
        // Unwrap the target onto the continuous track nearest the
        // current rotation, then ease toward it.
        let arc = shortest_arc_deg(self.rotation_deg, target_deg);
        let alpha = if self.time_constant_s > 0.0 {
            1.0 - (-dt_s / self.time_constant_s).exp()
        } else {
            1.0
        };
        self.rotation_deg += alpha * arc;
        self.rotation_deg
    }

    /// Continuous rotation in degrees, unbounded.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Rotation normalized to [0, 360) for display.
    pub fn display_deg(&self) -> f64 {
        normalize_360(self.rotation_deg)
    }

    /// Whether at least one reading has been consumed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_bearing_wraps() {
        assert!((relative_bearing_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((relative_bearing_deg(350.0, 10.0) - 340.0).abs() < 1e-12);
    }

    #[test]
    fn first_update_snaps() {
        let mut f = NeedleFilter::new(0.5);
        let r = f.update(123.0, 0.016);
        assert_eq!(r, 123.0);
    }

    #[test]
    fn converges_to_fixed_target() {
        let mut f = NeedleFilter::new(0.2);
        f.update(0.0, 0.016);
        let mut last = 0.0;
        for _ in 0..600 {
            last = f.update(90.0, 0.016);
        }
        assert!((last - 90.0).abs() < 0.01, "settled at {last}");
    }

    #[test]
    fn approach_is_monotonic() {
        let mut f = NeedleFilter::new(0.3);
        f.update(0.0, 0.016);
        let mut prev = 0.0;
        for _ in 0..200 {
            let r = f.update(90.0, 0.016);
            assert!(r >= prev - 1e-12, "overshoot: {r} < {prev}");
            assert!(r <= 90.0 + 1e-9, "past target: {r}");
            prev = r;
        }
    }

    #[test]
    fn crosses_north_the_short_way() {
        let mut f = NeedleFilter::new(0.1);
        f.update(359.0, 0.016);
        // Target swings to 1 deg: +2 the short way, not -358.
        let mut r = 359.0;
        for _ in 0..600 {
            r = f.update(1.0, 0.016);
        }
        // Continuous rotation passed 360 rather than rewinding.
        assert!((r - 361.0).abs() < 0.01, "rotation = {r}");
        assert!((f.display_deg() - 1.0).abs() < 0.01);
    }

    #[test]
    fn step_never_exceeds_input_arc() {
        let mut f = NeedleFilter::new(0.5);
        f.update(0.0, 0.016);
        let before = f.rotation_deg();
        let after = f.update(120.0, 0.016);
        let arc = 120.0;
        assert!(
            (after - before).abs() <= arc,
            "filtered step {} exceeds raw arc {arc}",
            (after - before).abs()
        );
        // Heavily damped: a 16 ms frame moves only a few percent.
        assert!((after - before).abs() < 5.0);
    }

    #[test]
    fn zero_time_constant_snaps() {
        let mut f = NeedleFilter::new(0.0);
        f.update(10.0, 0.016);
        // 10 -> 200 goes counterclockwise (-170): continuous rotation
        // lands at -160, displaying 200.
        let r = f.update(200.0, 0.016);
        assert!((r - (-160.0)).abs() < 1e-9, "rotation = {r}");
        assert!((f.display_deg() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn zero_dt_is_inert() {
        let mut f = NeedleFilter::new(0.5);
        f.update(10.0, 0.016);
        let r = f.update(90.0, 0.0);
        assert_eq!(r, 10.0);
    }
}

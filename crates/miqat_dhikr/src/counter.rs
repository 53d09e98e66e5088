//! Tasbih (tally) counter.
//!
//! A counter is owned by its screen: resetting means the parent
//! constructs a fresh instance with [`TasbihCounter::fresh`] and drops
//! the old one, rather than signalling a child to re-initialize.

use serde::{Deserialize, Serialize};

/// What an increment did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyStep {
    /// Count advanced, target not yet reached.
    Counted,
    /// This increment reached the target; the count wrapped to zero
    /// and the completed-cycle total advanced.
    CycleComplete,
}

/// Target-counted repetition counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasbihCounter {
    count: u32,
    target: u32,
    completed_cycles: u32,
}

impl TasbihCounter {
    /// Counter at zero with the given target (at least 1).
    pub fn new(target: u32) -> Self {
        Self {
            count: 0,
            target: target.max(1),
            completed_cycles: 0,
        }
    }

    /// A replacement counter with the same target and nothing counted.
    pub fn fresh(&self) -> Self {
        Self::new(self.target)
    }

    /// Advance by one. Reaching the target wraps the count and reports
    /// [`TallyStep::CycleComplete`] exactly once per cycle.
    pub fn increment(&mut self) -> TallyStep {
        self.count += 1;
        if self.count >= self.target {
            self.count = 0;
            self.completed_cycles += 1;
            TallyStep::CycleComplete
        } else {
            TallyStep::Counted
        }
    }

    /// Current count within the cycle, 0..target.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The cycle target.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Completed cycles since construction.
    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Fraction of the current cycle done, 0.0..1.0.
    pub fn progress(&self) -> f64 {
        f64::from(self.count) / f64::from(self.target)
    }
}

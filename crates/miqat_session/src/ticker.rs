//! Scheduled-task registration with cancellation handles.
//!
//! The host runtime owns the clock and pumps [`TickScheduler::due`]
//! from its frame/timer callback; registered tasks carry explicit
//! handles and never outlive a cancel. This replaces ambient
//! set-interval/cleanup-closure pairs with owned state.

use std::time::{Duration, Instant};

/// Handle to a registered tick task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

#[derive(Debug)]
struct Task {
    id: u64,
    period: Duration,
    next_fire: Instant,
}

/// Single-threaded periodic task registry.
#[derive(Debug)]
pub struct TickScheduler {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a task firing every `period`, first due one period
    /// after `now`.
    pub fn every(&mut self, period: Duration, now: Instant) -> TickHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            period,
            next_fire: now + period,
        });
        TickHandle(id)
    }

    /// Deregister. Cancelling an already-cancelled handle is a no-op.
    pub fn cancel(&mut self, handle: TickHandle) {
        self.tasks.retain(|t| t.id != handle.0);
    }

    /// Whether the handle is still registered.
    pub fn is_registered(&self, handle: TickHandle) -> bool {
        self.tasks.iter().any(|t| t.id == handle.0)
    }

    /// Tasks due at `now`. Each fires at most once per pump; a task
    /// that fell several periods behind (the app was backgrounded)
    /// reschedules from `now` rather than replaying missed ticks.
    pub fn due(&mut self, now: Instant) -> Vec<TickHandle> {
        let mut fired = Vec::new();
        for task in &mut self.tasks {
            if task.next_fire <= now {
                fired.push(TickHandle(task.id));
                task.next_fire = now + task.period;
            }
        }
        fired
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

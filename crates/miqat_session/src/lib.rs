//! Screen-session plumbing: tick scheduling, sensor subscriptions, and
//! the compass and prayer screen state objects.
//!
//! Everything here follows the single-threaded, event/timer-driven
//! model of a UI runtime: state is owned by a screen-level object with
//! an explicit mount/focus/blur/unmount lifecycle, timers are explicit
//! registrations with cancellation handles, and sensor streams are
//! RAII subscriptions released on every exit path.

pub mod compass;
pub mod prayer;
pub mod sensors;
pub mod ticker;

pub use compass::{CompassSession, NEEDLE_TIME_CONSTANT_S};
pub use prayer::{COUNTDOWN_TICK, PrayerSession, SELECTION_TICK};
pub use sensors::{
    CountingHeadingProvider, FixedLocation, HeadingProvider, HeadingSubscription,
    LocationProvider, NoLocation,
};
pub use ticker::{TickHandle, TickScheduler};

//! Sensor provider seams and the subscription guard.
//!
//! Heading delivery is a push stream the platform owns; the session
//! only controls the subscription's extent. The guard releases on
//! drop, so every exit path — blur, unmount, an error thrown during
//! setup — tears the stream down.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use miqat_core::GeoCoordinate;

/// A source of location fixes.
///
/// `None` means no fix is available: permission denied or a transient
/// failure. Consumers leave dependent state unset rather than erroring.
pub trait LocationProvider {
    fn current(&self) -> Option<GeoCoordinate>;
}

/// A fixed location, for offline fallbacks and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoCoordinate);

impl LocationProvider for FixedLocation {
    fn current(&self) -> Option<GeoCoordinate> {
        Some(self.0)
    }
}

/// A provider with no fix (permission denied).
#[derive(Debug, Clone, Copy)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current(&self) -> Option<GeoCoordinate> {
        None
    }
}

/// RAII guard over an active heading stream.
///
/// Dropping the guard releases the subscription. Guards are not
/// cloneable: one acquisition, one release.
#[derive(Debug)]
pub struct HeadingSubscription {
    active: Rc<Cell<usize>>,
}

impl Drop for HeadingSubscription {
    fn drop(&mut self) {
        let n = self.active.get();
        self.active.set(n.saturating_sub(1));
        debug!("heading subscription released");
    }
}

/// A source of compass heading streams.
pub trait HeadingProvider {
    /// Begin delivery; the stream stays open while the returned guard
    /// lives.
    fn subscribe(&self) -> HeadingSubscription;
}

/// Reference heading provider tracking its live-subscription count.
///
/// Real platforms adapt their sensor API behind this trait; the
/// counting implementation is also what the lifecycle tests observe.
#[derive(Debug, Clone, Default)]
pub struct CountingHeadingProvider {
    active: Rc<Cell<usize>>,
}

impl CountingHeadingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently held subscriptions.
    pub fn active_subscriptions(&self) -> usize {
        self.active.get()
    }
}

impl HeadingProvider for CountingHeadingProvider {
    fn subscribe(&self) -> HeadingSubscription {
        self.active.set(self.active.get() + 1);
        debug!("heading subscription acquired");
        HeadingSubscription {
            active: Rc::clone(&self.active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_releases_on_drop() {
        let p = CountingHeadingProvider::new();
        assert_eq!(p.active_subscriptions(), 0);
        {
            let _sub = p.subscribe();
            assert_eq!(p.active_subscriptions(), 1);
        }
        assert_eq!(p.active_subscriptions(), 0);
    }

    #[test]
    fn release_covers_early_exit() {
        // A setup path that errors after acquiring must still release.
        let p = CountingHeadingProvider::new();
        let result: Result<(), &str> = (|| {
            let _sub = p.subscribe();
            Err("setup failed")?;
            Ok(())
        })();
        assert!(result.is_err());
        assert_eq!(p.active_subscriptions(), 0);
    }

    #[test]
    fn independent_subscriptions() {
        let p = CountingHeadingProvider::new();
        let a = p.subscribe();
        let b = p.subscribe();
        assert_eq!(p.active_subscriptions(), 2);
        drop(a);
        assert_eq!(p.active_subscriptions(), 1);
        drop(b);
        assert_eq!(p.active_subscriptions(), 0);
    }

    #[test]
    fn location_providers() {
        let fix = FixedLocation(GeoCoordinate::new(21.4225, 39.8262));
        assert!(fix.current().is_some());
        assert!(NoLocation.current().is_none());
    }
}

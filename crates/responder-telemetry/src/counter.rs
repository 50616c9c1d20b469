//! Counter and metric factory capabilities

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A monotonically increasing counter
///
/// Implementations must tolerate concurrent increments from many threads
/// without losing updates.
pub trait Counter: Send + Sync {
    /// Increase the counter by `value`
    fn increment_by(&self, value: u64);

    /// Current value
    fn value(&self) -> u64;

    /// Increase the counter by one
    fn increment(&self) {
        self.increment_by(1);
    }
}

/// Source of named counters
///
/// Counters are created lazily on first request. Asking twice for the same
/// name returns handles to the same underlying counter.
pub trait MetricFactory: Send + Sync {
    /// Get or create the counter registered under `name`
    fn counter(&self, name: &str) -> Arc<dyn Counter>;
}

impl<T: MetricFactory + ?Sized> MetricFactory for Arc<T> {
    fn counter(&self, name: &str) -> Arc<dyn Counter> {
        (**self).counter(name)
    }
}

/// Plain atomic counter used by the in-process factories
#[derive(Debug, Default)]
pub struct AtomicCounter {
    value: AtomicU64,
}

impl AtomicCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

impl Counter for AtomicCounter {
    fn increment_by(&self, value: u64) {
        self.value.fetch_add(value, Ordering::Relaxed);
    }

    fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_counter() {
        let counter = AtomicCounter::new();
        counter.increment();
        counter.increment_by(4);
        assert_eq!(counter.value(), 5);

        counter.reset();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_concurrent_increments() {
        let counter = Arc::new(AtomicCounter::new());

        std::thread::scope(|s| {
            for _ in 0..8 {
                let counter = Arc::clone(&counter);
                s.spawn(move || {
                    for _ in 0..1000 {
                        counter.increment();
                    }
                });
            }
        });

        assert_eq!(counter.value(), 8000);
    }
}

//! In-process counter storage

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::counter::{AtomicCounter, Counter, MetricFactory};

/// Metric factory keeping counters in process memory
///
/// Cloning the factory shares the same counters, so a handle kept by the
/// hosting service sees every increment made by the engine.
#[derive(Clone, Default)]
pub struct InMemoryMetricFactory {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    counters: RwLock<HashMap<String, Arc<AtomicCounter>>>,
}

impl InMemoryMetricFactory {
    /// Create a new factory with no counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a counter, zero if it was never created
    pub fn value(&self, name: &str) -> u64 {
        self.inner
            .counters
            .read()
            .get(name)
            .map(|c| c.value())
            .unwrap_or(0)
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let mut counters: Vec<(String, u64)> = self
            .inner
            .counters
            .read()
            .iter()
            .map(|(name, counter)| (name.clone(), counter.value()))
            .collect();
        counters.sort_by(|a, b| a.0.cmp(&b.0));

        MetricsSnapshot { counters }
    }

    /// Set every counter back to zero
    ///
    /// Handles obtained earlier stay valid and keep counting from zero.
    pub fn reset(&self) {
        for counter in self.inner.counters.read().values() {
            counter.reset();
        }
    }

    fn get_or_create(&self, name: &str) -> Arc<AtomicCounter> {
        if let Some(counter) = self.inner.counters.read().get(name) {
            return Arc::clone(counter);
        }

        let mut counters = self.inner.counters.write();
        Arc::clone(counters.entry(name.to_string()).or_default())
    }
}

impl MetricFactory for InMemoryMetricFactory {
    fn counter(&self, name: &str) -> Arc<dyn Counter> {
        self.get_or_create(name)
    }
}

/// Snapshot of current counter values, ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub counters: Vec<(String, u64)>,
}

impl MetricsSnapshot {
    /// Value of a counter in this snapshot
    pub fn get(&self, name: &str) -> Option<u64> {
        self.counters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetricNames;

    #[test]
    fn test_counters_are_shared_by_name() {
        let factory = InMemoryMetricFactory::new();

        let first = factory.counter("alerts");
        let second = factory.counter("alerts");
        first.increment();
        second.increment();

        assert_eq!(first.value(), 2);
        assert_eq!(factory.value("alerts"), 2);
    }

    #[test]
    fn test_clones_share_counters() {
        let factory = InMemoryMetricFactory::new();
        let handle = factory.clone();

        factory
            .counter(MetricNames::EngineProcessedMessages.name())
            .increment_by(3);

        assert_eq!(handle.value(MetricNames::EngineProcessedMessages.name()), 3);
    }

    #[test]
    fn test_unknown_counter_is_zero() {
        let factory = InMemoryMetricFactory::new();
        assert_eq!(factory.value("missing"), 0);
        assert!(factory.snapshot().counters.is_empty());
    }

    #[test]
    fn test_snapshot_and_reset() {
        let factory = InMemoryMetricFactory::new();
        let errors = factory.counter("b_errors");
        errors.increment();
        factory.counter("a_processed").increment_by(2);

        let snapshot = factory.snapshot();
        assert_eq!(
            snapshot.counters,
            vec![("a_processed".to_string(), 2), ("b_errors".to_string(), 1)]
        );
        assert_eq!(snapshot.get("b_errors"), Some(1));

        factory.reset();
        assert_eq!(factory.value("a_processed"), 0);

        errors.increment();
        assert_eq!(factory.value("b_errors"), 1);
    }
}

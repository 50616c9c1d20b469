//! Counters backed by the `metrics` facade

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::counter::{Counter, MetricFactory};

/// Metric factory forwarding increments to the installed `metrics` recorder
///
/// Each counter registers with whatever recorder is active when it is first
/// requested, so the recorder has to be installed before the engine is
/// built. A local value is kept alongside because recorders are write-only.
#[derive(Clone, Default)]
pub struct RecorderMetricFactory {
    counters: Arc<RwLock<HashMap<String, Arc<RecorderCounter>>>>,
}

impl RecorderMetricFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricFactory for RecorderMetricFactory {
    fn counter(&self, name: &str) -> Arc<dyn Counter> {
        if let Some(counter) = self.counters.read().get(name) {
            return Arc::clone(counter) as Arc<dyn Counter>;
        }

        let mut counters = self.counters.write();
        let counter = counters
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(RecorderCounter::register(name)));
        Arc::clone(counter) as Arc<dyn Counter>
    }
}

struct RecorderCounter {
    handle: metrics::Counter,
    value: AtomicU64,
}

impl RecorderCounter {
    fn register(name: &str) -> Self {
        Self {
            handle: metrics::counter!(name.to_string()),
            value: AtomicU64::new(0),
        }
    }
}

impl Counter for RecorderCounter {
    fn increment_by(&self, value: u64) {
        self.handle.increment(value);
        self.value.fetch_add(value, Ordering::Relaxed);
    }

    fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

//! Responder Telemetry
//!
//! Counter sinks used by the Responder rules engine.
//!
//! Provides:
//! - The `Counter` and `MetricFactory` capabilities the engine increments
//! - The registry of well-known counter names
//! - An in-memory factory and one backed by the `metrics` facade
//! - Prometheus exporter bootstrap

pub mod counter;
pub mod exporter;
pub mod memory;
pub mod names;
pub mod recorder;

pub use counter::{AtomicCounter, Counter, MetricFactory};
pub use exporter::{describe_engine_counters, init_metrics};
pub use memory::{InMemoryMetricFactory, MetricsSnapshot};
pub use names::MetricNames;
pub use recorder::RecorderMetricFactory;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::counter::{Counter, MetricFactory};
    pub use crate::memory::InMemoryMetricFactory;
    pub use crate::names::MetricNames;
    pub use crate::recorder::RecorderMetricFactory;
}

//! Prometheus export of engine counters

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

use crate::MetricNames;

/// Install the Prometheus recorder globally and describe the engine counters
///
/// The returned handle renders the exposition text; serving it is up to the
/// hosting service. Pair with [`RecorderMetricFactory`](crate::RecorderMetricFactory)
/// so engine increments reach the recorder.
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    describe_engine_counters();

    info!("Metrics exporter initialized");
    Ok(handle)
}

/// Register descriptions for the engine counters with the active recorder
pub fn describe_engine_counters() {
    for name in MetricNames::ENGINE {
        metrics::describe_counter!(name.name(), name.description());
    }
}

mod instruments;
mod prometheus_metrics;

pub use prometheus_metrics::PrometheusMetrics;
use std::sync::Arc;

/// Creates a new Prometheus metrics implementation.
///
/// Every call builds a private registry holding the greeting counter, the
/// request duration histogram and the request counter.
///
/// # Errors
/// Returns an error if an instrument cannot be registered. This is fatal
/// at startup; there is no fallback backend.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    Ok(Arc::new(PrometheusMetrics::new()?))
}

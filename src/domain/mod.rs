mod metrics;

// Publicly expose the Metrics abstraction
pub use metrics::{HttpRequestLabels, Metrics, MetricsPtr};

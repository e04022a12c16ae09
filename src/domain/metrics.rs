use std::sync::Arc;
use std::time::Instant;

/// Abstraction for application metrics (counters, histograms).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> anyhow::Result<String>;

    /// Content type matching the output of [`Metrics::render`].
    fn content_type(&self) -> String;

    /// Record one greeting served from the root route.
    fn record_greeting(&self);

    /// Record HTTP request duration and labels.
    fn record_http_request(&self, start: Instant, request: &HttpRequestLabels<'_>);
}

/// Label set attached to a single tracked HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpRequestLabels<'a> {
    pub method: &'a str,
    pub route: &'a str,
    pub status: u16,
    pub upgrade: bool,
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;

//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait on
//! top of the `prometheus` crate. Each instance owns its own `Registry`, so
//! two routers built in the same process never share counts. Instruments are
//! created and registered once in `instruments.rs`; this file only records
//! into them and encodes the registry in the Prometheus text format.

use super::instruments::Instruments;
use crate::domain::{HttpRequestLabels, Metrics};
use prometheus::{Encoder, Registry, TextEncoder};
use std::time::Instant;

/// Prometheus-based metrics implementation.
pub struct PrometheusMetrics {
    instruments: Instruments,
}

impl PrometheusMetrics {
    /// Builds the instruments inside a fresh registry.
    pub fn new() -> prometheus::Result<Self> {
        Self::with_registry(Registry::new())
    }

    /// Builds the instruments inside `registry`.
    ///
    /// Fails if any instrument name is already registered there.
    pub fn with_registry(registry: Registry) -> prometheus::Result<Self> {
        tracing::info!("Creating Prometheus metrics");
        Ok(PrometheusMetrics {
            instruments: Instruments::register(registry)?,
        })
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> anyhow::Result<String> {
        let families = self.instruments.registry.gather();
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    fn record_greeting(&self) {
        tracing::debug!("Recording greeting");
        self.instruments.greetings.inc();
    }

    fn record_http_request(&self, start: Instant, request: &HttpRequestLabels<'_>) {
        tracing::debug!("Recording HTTP request duration");
        let elapsed = start.elapsed().as_secs_f64();
        let code = request.status.to_string();
        let upgrade = if request.upgrade { "true" } else { "false" };

        self.instruments
            .http_duration
            .with_label_values(&[request.method, request.route, code.as_str(), upgrade])
            .observe(elapsed);
        self.instruments
            .http_requests
            .with_label_values(&[code.as_str(), request.method])
            .inc();
    }
}

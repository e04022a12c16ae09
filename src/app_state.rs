//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The only shared resource is the
//! metrics backend; everything a request needs beyond that is derived from
//! the request itself.

use crate::domain::MetricsPtr;

/// Shared application state passed to all Axum handlers.
///
/// # Lifecycle
///
/// 1. Created once in `create_router()` during application startup
/// 2. Attached to the Axum router via `.with_state(app_state)` and handed to
///    the request-tracking middleware
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers extract via `State(state): State<AppState>`
///
/// Cloning only bumps the reference count of the metrics backend; all clones
/// record into the same registry.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Metrics implementation for recording application events.
    ///
    /// Wrapped in `Arc` via `MetricsPtr` for cheap cloning.
    metrics: MetricsPtr,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr) -> Self {
        // ---
        AppState { metrics }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }
}

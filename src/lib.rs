// src/lib.rs
use anyhow::{Context, Result};
use app_state::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;

use handlers::{metrics_handler, root_handler};
use middleware::track_http_requests;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod middleware;

pub use config::*;
pub use handlers::GREETING;

// Publicly expose the infrastructure creation function
pub use infrastructure::create_prom_metrics;

/// Build the HTTP router backed by a fresh Prometheus registry.
///
/// # Errors
/// Fails if the metric instruments cannot be registered.
pub fn create_router() -> Result<Router> {
    // ---
    let metrics = create_prom_metrics()?;
    Ok(create_router_with_metrics(metrics))
}

/// Build the HTTP router on top of an existing metrics backend.
///
/// `/` accepts any method and is wrapped by the request-tracking
/// middleware; `/metrics` is registered after the layer and stays
/// untracked.
pub fn create_router_with_metrics(metrics: domain::MetricsPtr) -> Router {
    // ---
    let app_state = AppState::new(metrics);

    Router::new()
        .route("/", any(root_handler))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            track_http_requests,
        ))
        .route("/metrics", get(metrics_handler))
        .with_state(app_state)
}

/// Bind the TCP listener for the service.
///
/// There is no retry and no fallback port: if `addr` cannot be bound the
/// error is returned and startup must abort.
pub async fn bind_listener(addr: &str) -> Result<TcpListener> {
    // ---
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind listener on {addr}"))
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    // ---
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

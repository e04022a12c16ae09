//! Request-tracking middleware.
//!
//! Wraps a route, times the inner service and records one duration
//! observation plus one request count per completed request. The response
//! passes through untouched.

use crate::app_state::AppState;
use crate::domain::HttpRequestLabels;
use axum::{
    extract::{MatchedPath, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Middleware that records `http_request_duration_seconds` and
/// `http_requests_total` for every request it sees.
///
/// Attach with `Router::route_layer` so the matched route template is
/// available; otherwise the raw request path is used as the route label.
pub(crate) async fn track_http_requests(
    State(app_state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    // ---
    let start = Instant::now();
    let method = req.method().clone();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };
    let upgrade = is_upgrade_request(req.headers());

    let response = next.run(req).await;

    app_state.metrics().record_http_request(
        start,
        &HttpRequestLabels {
            method: method.as_str(),
            route: &route,
            status: response.status().as_u16(),
            upgrade,
        },
    );

    response
}

/// True when the client asked to switch protocols: an `Upgrade` header is
/// present and `Connection` lists the `upgrade` token.
fn is_upgrade_request(headers: &HeaderMap) -> bool {
    // ---
    if !headers.contains_key(header::UPGRADE) {
        return false;
    }

    headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|token| token.trim().eq_ignore_ascii_case("upgrade"))
}

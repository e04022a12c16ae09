use crate::app_state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Handler for the `/metrics` endpoint.
///
/// Returns every registered instrument in Prometheus text format for
/// scraping. Recording nothing itself, so scrapes never skew the counts.
pub async fn metrics_handler(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    // ---

    let metrics = app_state.metrics();
    let metrics_text = metrics.render().map_err(|err| {
        tracing::error!("Failed to render metrics: {err:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, metrics.content_type())],
        metrics_text,
    ))
}

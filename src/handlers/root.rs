use crate::app_state::AppState;
use axum::extract::State;

/// Fixed body returned from `/`.
pub const GREETING: &str = "Hello, is it me you're looking for?";

/// Handler for the `/` endpoint.
///
/// Ignores everything about the request and always answers `200 OK` with
/// [`GREETING`], counting one greeting on the way out.
pub async fn root_handler(State(app_state): State<AppState>) -> &'static str {
    // ---
    app_state.metrics().record_greeting();
    GREETING
}

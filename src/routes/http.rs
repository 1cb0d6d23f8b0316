// GET handlers: version, api/status

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/status — fetches a fresh snapshot from the stats service.
/// Errors surface as 500 with the error text; no cached fallback.
pub(super) async fn api_status_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.stats_repo.fetch().await {
        Ok(info) => axum::Json(info).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

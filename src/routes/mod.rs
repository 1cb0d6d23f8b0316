// HTTP surface: pull status endpoint + Telegram webhook

mod http;
mod telegram;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::notifier::Notify;
use crate::stats_repo::StatsRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) stats_repo: Arc<StatsRepo>,
    pub(crate) notifier: Arc<dyn Notify>,
}

pub fn app(stats_repo: Arc<StatsRepo>, notifier: Arc<dyn Notify>) -> Router {
    let state = AppState {
        stats_repo,
        notifier,
    };
    Router::new()
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/status", get(http::api_status_handler)) // GET /api/status
        .route("/telegram", post(telegram::webhook_handler)) // POST /telegram
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

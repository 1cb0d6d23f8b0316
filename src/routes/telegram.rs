// POST /telegram — webhook for inbound bot commands.
// Always acknowledges with 200: a non-2xx makes the sender redeliver the
// same update in a loop, so malformed or unrecognized payloads are
// dropped silently, never rejected.

use axum::{body::Bytes, extract::State, http::StatusCode};

use super::AppState;
use crate::models::{InboundCommand, TelegramUpdate};
use crate::report::build_report;

pub(super) async fn webhook_handler(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let Ok(update) = serde_json::from_slice::<TelegramUpdate>(&body) else {
        return StatusCode::OK;
    };
    let Some(command) = update.into_command() else {
        return StatusCode::OK;
    };
    dispatch(state, command);
    StatusCode::OK
}

/// Recognized command prefixes. Delivery is fire-and-forget: the spawned
/// task owns fetch -> format -> deliver, and its outcome is only logged.
fn dispatch(state: AppState, command: InboundCommand) {
    let chat_id = command.chat_id.to_string();
    if command.text.starts_with("/count") || command.text.starts_with("/status") {
        tokio::spawn(async move {
            let message = match state.stats_repo.fetch().await {
                Ok(info) => build_report(&info),
                Err(e) => format!("Error getting stats: {e}"),
            };
            if let Err(e) = state.notifier.deliver(&chat_id, &message).await {
                tracing::warn!(error = %e, chat_id = %chat_id, "webhook report delivery failed");
            }
        });
    } else if command.text.starts_with("/top") {
        tokio::spawn(async move {
            if let Err(e) = state
                .notifier
                .deliver(&chat_id, "Top-sites feature is not implemented yet.")
                .await
            {
                tracing::warn!(error = %e, chat_id = %chat_id, "webhook notice delivery failed");
            }
        });
    }
}

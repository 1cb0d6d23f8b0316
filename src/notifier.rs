// Notification delivery to the Telegram Bot API

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("telegram API error: {status} - {body}")]
    DeliveryFailed { status: u16, body: String },
}

/// Delivery seam. The reporter and the webhook handlers only see this
/// trait; tests substitute a recording implementation.
#[async_trait]
pub trait Notify: Send + Sync {
    async fn deliver(&self, chat_id: &str, text: &str) -> Result<(), NotifyError>;
}

/// sendMessage payload. Serializing the struct gives correct escaping of
/// backslashes, quotes, and newlines embedded in `text`.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

pub struct TelegramNotifier {
    client: reqwest::Client,
    bot_token: String,
}

impl TelegramNotifier {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Builds a notifier with a per-call timeout. No retry on failure;
    /// delivery is best-effort everywhere it is used.
    pub fn new(bot_token: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            bot_token: bot_token.into(),
        })
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn deliver(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id,
                text,
                parse_mode: "HTML",
            })
            .send()
            .await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::DeliveryFailed {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

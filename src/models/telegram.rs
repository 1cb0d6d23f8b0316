// Inbound Telegram webhook payloads.
// Every nested level is optional; senders post partial updates freely.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUpdate {
    #[serde(default)]
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub chat: Option<TelegramChat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

/// A bot command extracted from an update: originating chat plus trimmed text.
#[derive(Debug, Clone)]
pub struct InboundCommand {
    pub chat_id: i64,
    pub text: String,
}

impl TelegramUpdate {
    /// Extracts the command when both `message` and `message.chat` are present.
    /// Missing text is treated as an empty command, not an error.
    pub fn into_command(self) -> Option<InboundCommand> {
        let message = self.message?;
        let chat = message.chat?;
        let text = message.text.unwrap_or_default().trim().to_string();
        Some(InboundCommand {
            chat_id: chat.id,
            text,
        })
    }
}

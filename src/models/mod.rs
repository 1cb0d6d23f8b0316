// Domain models (stats wire shapes + Telegram payloads)

mod stats;
mod telegram;

pub use stats::{ConnectionInfo, RawStat, StatsResponse};
pub use telegram::{InboundCommand, TelegramChat, TelegramMessage, TelegramUpdate};

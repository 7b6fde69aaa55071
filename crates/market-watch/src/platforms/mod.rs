//! Delivery sinks for composed reports

pub mod feishu;
pub mod telegram;

pub use feishu::{FeishuConfig, FeishuSink};
pub use telegram::{TelegramConfig, TelegramSink};

use async_trait::async_trait;
use std::fmt;

use crate::error::Result;

/// Supported chat platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Telegram,
    Feishu,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Telegram => write!(f, "Telegram"),
            Platform::Feishu => write!(f, "Feishu"),
        }
    }
}

/// Transmits one composed report to a chat endpoint
#[async_trait]
pub trait DeliverySink: Send + Sync {
    fn platform(&self) -> Platform;

    /// Perform the single outbound POST for this report.
    ///
    /// A non-success response is fatal; the next scheduled run is the
    /// retry strategy.
    async fn deliver(&self, text: &str) -> Result<()>;
}

//! Telegram delivery via the Bot API sendMessage endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::info;

use super::{DeliverySink, Platform};
use crate::error::{MarketError, Result};

/// Telegram bot credentials
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token from BotFather
    pub token: String,

    /// Target chat id
    pub chat_id: String,
}

impl TelegramConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("TG_BOT_TOKEN")
            .map_err(|_| MarketError::Config("TG_BOT_TOKEN not set".to_string()))?;

        let chat_id = std::env::var("TG_CHAT_ID")
            .map_err(|_| MarketError::Config("TG_CHAT_ID not set".to_string()))?;

        Ok(Self { token, chat_id })
    }
}

/// Telegram delivery sink
pub struct TelegramSink {
    config: TelegramConfig,
    client: Client,
}

impl TelegramSink {
    /// Create a new sink; `timeout` bounds the single outbound call
    pub fn new(config: TelegramConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl DeliverySink for TelegramSink {
    fn platform(&self) -> Platform {
        Platform::Telegram
    }

    async fn deliver(&self, text: &str) -> Result<()> {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.token
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": self.config.chat_id,
                "text": text,
                "disable_web_page_preview": true,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::DeliveryFailed {
                platform: Platform::Telegram,
                reason: format!("HTTP {status}"),
            });
        }

        info!(chat_id = %self.config.chat_id, "report delivered to Telegram");
        Ok(())
    }
}

//! Feishu (Lark) delivery via an incoming-webhook bot

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::info;

use super::{DeliverySink, Platform};
use crate::error::{MarketError, Result};

/// Feishu incoming-webhook configuration
#[derive(Debug, Clone)]
pub struct FeishuConfig {
    /// Webhook URL for the target group bot
    pub webhook_url: String,
}

impl FeishuConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let webhook_url = std::env::var("FEISHU_WEBHOOK_URL")
            .map_err(|_| MarketError::Config("FEISHU_WEBHOOK_URL not set".to_string()))?;

        Ok(Self { webhook_url })
    }
}

/// Feishu delivery sink
pub struct FeishuSink {
    config: FeishuConfig,
    client: Client,
}

/// Webhook acknowledgement; a non-zero code means the bot rejected the
/// message even though the HTTP layer succeeded
#[derive(Debug, Deserialize)]
struct WebhookResponse {
    code: i64,
    #[serde(default)]
    msg: String,
}

impl FeishuSink {
    /// Create a new sink; `timeout` bounds the single outbound call
    pub fn new(config: FeishuConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl DeliverySink for FeishuSink {
    fn platform(&self) -> Platform {
        Platform::Feishu
    }

    async fn deliver(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(&json!({
                "msg_type": "text",
                "content": { "text": text },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::DeliveryFailed {
                platform: Platform::Feishu,
                reason: format!("HTTP {status}"),
            });
        }

        let ack: WebhookResponse = response.json().await?;
        if ack.code != 0 {
            return Err(MarketError::DeliveryFailed {
                platform: Platform::Feishu,
                reason: format!("code {}: {}", ack.code, ack.msg),
            });
        }

        info!("report delivered to Feishu");
        Ok(())
    }
}

//! Error types for market monitoring operations

use thiserror::Error;

use crate::platforms::Platform;

/// Market monitoring specific errors
#[derive(Debug, Error)]
pub enum MarketError {
    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinance(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The chat endpoint rejected the message
    #[error("Delivery via {platform} failed: {reason}")]
    DeliveryFailed { platform: Platform, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for market monitoring operations
pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::Config("TG_BOT_TOKEN not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: TG_BOT_TOKEN not set");

        let err = MarketError::DeliveryFailed {
            platform: Platform::Telegram,
            reason: "HTTP 403 Forbidden".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Delivery via Telegram failed: HTTP 403 Forbidden"
        );
    }

    #[test]
    fn test_yahoo_error_display() {
        let err = MarketError::YahooFinance("fetching the data failed".to_string());
        assert!(err.to_string().contains("Yahoo Finance"));
    }
}

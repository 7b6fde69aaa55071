//! Configuration for market monitoring runs
//!
//! Loaded once at process entry and immutable afterwards. Delivery
//! credentials live with their platform modules; this struct carries the
//! index universe and the risk parameters.

use chrono_tz::Tz;
use std::time::Duration;

use crate::error::{MarketError, Result};

/// A tracked index: display name plus Yahoo Finance symbol
#[derive(Debug, Clone)]
pub struct IndexSpec {
    pub name: String,
    pub symbol: String,
}

impl IndexSpec {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Auxiliary symbols feeding the macro co-occurrence check
#[derive(Debug, Clone)]
pub struct MacroSymbols {
    /// Volatility gauge (VIX)
    pub volatility: String,
    /// Long-term Treasury yield (10Y)
    pub long_yield: String,
    /// Dollar strength gauge (ICE dollar index)
    pub dollar: String,
}

impl Default for MacroSymbols {
    fn default() -> Self {
        Self {
            volatility: "^VIX".to_string(),
            long_yield: "^TNX".to_string(),
            dollar: "DX-Y.NYB".to_string(),
        }
    }
}

/// Configuration for market monitoring runs
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Indexes to report on, in display order
    pub indexes: Vec<IndexSpec>,

    /// Macro indicator symbols
    pub macro_symbols: MacroSymbols,

    /// Days of history fetched per index
    pub history_days: u32,

    /// Days of history fetched per macro indicator
    pub macro_history_days: u32,

    /// Trailing window for the drawdown-from-high comparison
    pub lookback_high_days: usize,

    /// Drawdown (in percent, non-positive) at or below which the drawdown
    /// trigger may fire
    pub drawdown_threshold: f64,

    /// Decline streak length at which the consecutive-decline trigger fires
    pub min_down_days: usize,

    /// VIX close above this level counts as an elevated-volatility signal
    pub vix_threshold: f64,

    /// Timeout applied to each outbound delivery request
    pub request_timeout: Duration,

    /// Timezone used for the report header
    pub report_tz: Tz,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            indexes: vec![
                IndexSpec::new("Nasdaq", "^IXIC"),
                IndexSpec::new("S&P 500", "^GSPC"),
                IndexSpec::new("Dow Jones", "^DJI"),
            ],
            macro_symbols: MacroSymbols::default(),
            history_days: 30,
            macro_history_days: 5,
            lookback_high_days: 20,
            drawdown_threshold: -3.0,
            min_down_days: 4,
            vix_threshold: 20.0,
            request_timeout: Duration::from_secs(10),
            report_tz: chrono_tz::Asia::Shanghai,
        }
    }
}

impl WatchConfig {
    /// Create a new configuration builder
    pub fn builder() -> WatchConfigBuilder {
        WatchConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.indexes.is_empty() {
            return Err(MarketError::Config(
                "at least one index must be configured".to_string(),
            ));
        }

        if self.drawdown_threshold > 0.0 {
            return Err(MarketError::Config(
                "drawdown_threshold must not be positive".to_string(),
            ));
        }

        if self.min_down_days == 0 {
            return Err(MarketError::Config(
                "min_down_days must be at least 1".to_string(),
            ));
        }

        if self.lookback_high_days == 0 {
            return Err(MarketError::Config(
                "lookback_high_days must be at least 1".to_string(),
            ));
        }

        if self.history_days < 2 {
            return Err(MarketError::Config(
                "history_days must cover at least 2 sessions".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for WatchConfig
#[derive(Debug, Default)]
pub struct WatchConfigBuilder {
    indexes: Option<Vec<IndexSpec>>,
    macro_symbols: Option<MacroSymbols>,
    history_days: Option<u32>,
    macro_history_days: Option<u32>,
    lookback_high_days: Option<usize>,
    drawdown_threshold: Option<f64>,
    min_down_days: Option<usize>,
    vix_threshold: Option<f64>,
    request_timeout: Option<Duration>,
    report_tz: Option<Tz>,
}

impl WatchConfigBuilder {
    /// Set the indexes to report on
    pub fn indexes(mut self, indexes: Vec<IndexSpec>) -> Self {
        self.indexes = Some(indexes);
        self
    }

    /// Set the macro indicator symbols
    pub fn macro_symbols(mut self, symbols: MacroSymbols) -> Self {
        self.macro_symbols = Some(symbols);
        self
    }

    /// Set the per-index history window
    pub fn history_days(mut self, days: u32) -> Self {
        self.history_days = Some(days);
        self
    }

    /// Set the per-indicator macro history window
    pub fn macro_history_days(mut self, days: u32) -> Self {
        self.macro_history_days = Some(days);
        self
    }

    /// Set the drawdown lookback window
    pub fn lookback_high_days(mut self, days: usize) -> Self {
        self.lookback_high_days = Some(days);
        self
    }

    /// Set the drawdown trigger threshold
    pub fn drawdown_threshold(mut self, threshold: f64) -> Self {
        self.drawdown_threshold = Some(threshold);
        self
    }

    /// Set the consecutive-decline trigger length
    pub fn min_down_days(mut self, days: usize) -> Self {
        self.min_down_days = Some(days);
        self
    }

    /// Set the elevated-volatility level
    pub fn vix_threshold(mut self, threshold: f64) -> Self {
        self.vix_threshold = Some(threshold);
        self
    }

    /// Set the delivery request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the report header timezone
    pub fn report_tz(mut self, tz: Tz) -> Self {
        self.report_tz = Some(tz);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<WatchConfig> {
        let defaults = WatchConfig::default();

        let config = WatchConfig {
            indexes: self.indexes.unwrap_or(defaults.indexes),
            macro_symbols: self.macro_symbols.unwrap_or(defaults.macro_symbols),
            history_days: self.history_days.unwrap_or(defaults.history_days),
            macro_history_days: self
                .macro_history_days
                .unwrap_or(defaults.macro_history_days),
            lookback_high_days: self
                .lookback_high_days
                .unwrap_or(defaults.lookback_high_days),
            drawdown_threshold: self
                .drawdown_threshold
                .unwrap_or(defaults.drawdown_threshold),
            min_down_days: self.min_down_days.unwrap_or(defaults.min_down_days),
            vix_threshold: self.vix_threshold.unwrap_or(defaults.vix_threshold),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            report_tz: self.report_tz.unwrap_or(defaults.report_tz),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WatchConfig::default();
        assert_eq!(config.indexes.len(), 3);
        assert_eq!(config.lookback_high_days, 20);
        assert_eq!(config.min_down_days, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = WatchConfig::builder()
            .indexes(vec![IndexSpec::new("S&P 500", "^GSPC")])
            .drawdown_threshold(-5.0)
            .request_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.indexes.len(), 1);
        assert_eq!(config.drawdown_threshold, -5.0);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation_rejects_positive_threshold() {
        let config = WatchConfig {
            drawdown_threshold: 1.5,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_indexes() {
        let config = WatchConfig {
            indexes: Vec::new(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_short_history() {
        let result = WatchConfig::builder().history_days(1).build();
        assert!(result.is_err());
    }
}

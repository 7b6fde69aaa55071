//! Yahoo Finance API client

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

use super::{Close, PriceHistoryProvider, PriceSeries};
use crate::error::{MarketError, Result};

/// Yahoo Finance API client
pub struct YahooFinanceClient {}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    /// Fetch daily quotes between two instants
    async fn quote_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<yahoo::Quote>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| MarketError::YahooFinance(e.to_string()))?;

        // Convert chrono DateTime to time OffsetDateTime
        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| MarketError::YahooFinance(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| MarketError::YahooFinance(format!("Invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| MarketError::YahooFinance(e.to_string()))?;

        response
            .quotes()
            .map_err(|e| MarketError::YahooFinance(e.to_string()))
    }
}

#[async_trait]
impl PriceHistoryProvider for YahooFinanceClient {
    async fn history(&self, symbol: &str, days: u32) -> Result<PriceSeries> {
        let end = Utc::now();
        let start = end - chrono::Duration::days(i64::from(days));
        let quotes = self.quote_history(symbol, start, end).await?;

        // Drop half-formed rows the way a dropna() on closes would
        let closes = quotes
            .iter()
            .filter(|q| q.close.is_finite())
            .map(|q| Close {
                date: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now)
                    .date_naive(),
                price: q.close,
            })
            .collect();

        Ok(PriceSeries::new(symbol, closes))
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for YahooFinanceClient {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_history() {
        let client = YahooFinanceClient::new();
        let series = client.history("^GSPC", 30).await.unwrap();

        assert_eq!(series.symbol, "^GSPC");
        assert!(series.len() >= 2);
        assert!(series.prices().iter().all(|p| *p > 0.0));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_history_is_ascending() {
        let client = YahooFinanceClient::new();
        let series = client.history("^DJI", 30).await.unwrap();

        let dates: Vec<_> = series.closes.iter().map(|c| c.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}

//! Market data providers

pub mod yahoo;

pub use yahoo::YahooFinanceClient;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single daily close
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Close {
    pub date: NaiveDate,
    pub price: f64,
}

/// Ordered daily closes for one symbol, oldest first, non-trading days
/// omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub closes: Vec<Close>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, closes: Vec<Close>) -> Self {
        Self {
            symbol: symbol.into(),
            closes,
        }
    }

    /// Closing prices only, oldest first
    pub fn prices(&self) -> Vec<f64> {
        self.closes.iter().map(|c| c.price).collect()
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

/// Source of historical daily closes
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch up to `days` calendar days of daily closes for `symbol`,
    /// oldest first.
    ///
    /// May return fewer points than requested near market open or for
    /// freshly listed symbols.
    async fn history(&self, symbol: &str, days: u32) -> Result<PriceSeries>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_series_prices() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let series = PriceSeries::new(
            "^GSPC",
            vec![
                Close { date, price: 100.0 },
                Close {
                    date: date.succ_opt().unwrap(),
                    price: 98.0,
                },
            ],
        );

        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.prices(), vec![100.0, 98.0]);
    }
}

//! Run orchestration: fetch each series, compute figures, collect triggers

use chrono::Utc;
use tracing::{debug, info};

use super::result::{IndexResult, MacroFlag, MarketReport, RiskSignal};
use super::{macro_risk, signals};
use crate::api::PriceHistoryProvider;
use crate::config::WatchConfig;
use crate::error::Result;

/// Evaluates all configured indexes and macro indicators in one pass
pub struct RiskEngine<P> {
    provider: P,
    config: WatchConfig,
}

impl<P: PriceHistoryProvider> RiskEngine<P> {
    /// Create a new engine over a price history provider
    pub fn new(provider: P, config: WatchConfig) -> Self {
        Self { provider, config }
    }

    /// Evaluate every configured index sequentially, then the macro
    /// indicators.
    ///
    /// An index with fewer than two closes is skipped and does not abort
    /// the others; a provider failure aborts the whole run.
    pub async fn evaluate(&self, manual: bool) -> Result<MarketReport> {
        let mut indexes = Vec::with_capacity(self.config.indexes.len());
        let mut triggered = Vec::new();

        for spec in &self.config.indexes {
            let series = self
                .provider
                .history(&spec.symbol, self.config.history_days)
                .await?;
            let closes = series.prices();

            let Some(change) = signals::percent_change(&closes) else {
                info!(
                    symbol = %spec.symbol,
                    points = closes.len(),
                    "insufficient data, skipping index"
                );
                indexes.push(IndexResult::insufficient(&spec.name, &spec.symbol));
                continue;
            };

            let drawdown =
                signals::drawdown_from_high(&closes, self.config.lookback_high_days);
            let down_days = signals::consecutive_down_days(&closes);
            debug!(symbol = %spec.symbol, change, drawdown, down_days, "index evaluated");

            // A recovering index does not trigger even if historically
            // drawn down
            if drawdown <= self.config.drawdown_threshold && change < 0.0 {
                triggered.push(RiskSignal::Drawdown {
                    name: spec.name.clone(),
                    drawdown,
                    lookback: self.config.lookback_high_days,
                });
            }

            if down_days >= self.config.min_down_days {
                triggered.push(RiskSignal::ConsecutiveDecline {
                    name: spec.name.clone(),
                    days: down_days,
                });
            }

            indexes.push(IndexResult {
                name: spec.name.clone(),
                symbol: spec.symbol.clone(),
                percent_change: Some(change),
                drawdown_from_high: Some(drawdown),
                consecutive_down_days: down_days,
            });
        }

        let macro_flags = self.macro_flags().await?;

        Ok(MarketReport {
            generated_at: Utc::now(),
            manual,
            indexes,
            signals: triggered,
            macro_flags,
        })
    }

    async fn macro_flags(&self) -> Result<Vec<MacroFlag>> {
        let days = self.config.macro_history_days;
        let symbols = &self.config.macro_symbols;

        let volatility = self.provider.history(&symbols.volatility, days).await?;
        let long_yield = self.provider.history(&symbols.long_yield, days).await?;
        let dollar = self.provider.history(&symbols.dollar, days).await?;

        Ok(macro_risk::evaluate(
            &volatility.prices(),
            &long_yield.prices(),
            &dollar.prices(),
            self.config.vix_threshold,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Close, PriceSeries};
    use crate::config::IndexSpec;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    struct StubProvider {
        series: HashMap<String, Vec<f64>>,
    }

    impl StubProvider {
        fn new(series: &[(&str, &[f64])]) -> Self {
            Self {
                series: series
                    .iter()
                    .map(|(symbol, prices)| (symbol.to_string(), prices.to_vec()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl PriceHistoryProvider for StubProvider {
        async fn history(&self, symbol: &str, _days: u32) -> Result<PriceSeries> {
            let prices = self.series.get(symbol).cloned().unwrap_or_default();
            let base = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
            let closes = prices
                .iter()
                .enumerate()
                .map(|(i, &price)| Close {
                    date: base + chrono::Duration::days(i as i64),
                    price,
                })
                .collect();
            Ok(PriceSeries::new(symbol, closes))
        }
    }

    fn single_index_config() -> WatchConfig {
        WatchConfig {
            indexes: vec![IndexSpec::new("Nasdaq", "^IXIC")],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_both_triggers_fire_on_steady_decline() {
        let provider = StubProvider::new(&[("^IXIC", &[100.0, 98.0, 95.0, 93.0, 90.0])]);
        let engine = RiskEngine::new(provider, single_index_config());

        let report = engine.evaluate(false).await.unwrap();

        let index = &report.indexes[0];
        assert_eq!(index.percent_change, Some(-3.23));
        assert_eq!(index.drawdown_from_high, Some(-10.0));
        assert_eq!(index.consecutive_down_days, 4);

        assert_eq!(report.signals.len(), 2);
        assert!(matches!(report.signals[0], RiskSignal::Drawdown { .. }));
        assert!(matches!(
            report.signals[1],
            RiskSignal::ConsecutiveDecline { days: 4, .. }
        ));

        // Both trigger lines make it into the composed report
        let text = crate::report::compose(&report, &WatchConfig::default());
        assert!(text.contains("⚠️ Nasdaq is 10.00% below its 20-day high"));
        assert!(text.contains("📉 Nasdaq has fallen 4 sessions in a row"));
    }

    #[tokio::test]
    async fn test_recovering_index_does_not_trigger() {
        // Drawn down well past the threshold, but today is an up day
        let provider = StubProvider::new(&[("^IXIC", &[100.0, 93.0, 90.0, 94.0])]);
        let engine = RiskEngine::new(provider, single_index_config());

        let report = engine.evaluate(false).await.unwrap();

        assert_eq!(report.indexes[0].percent_change, Some(4.44));
        assert!(report.signals.is_empty());
    }

    #[tokio::test]
    async fn test_down_day_without_deep_drawdown_does_not_trigger() {
        let provider = StubProvider::new(&[("^IXIC", &[100.0, 100.5, 99.5])]);
        let engine = RiskEngine::new(provider, single_index_config());

        let report = engine.evaluate(false).await.unwrap();

        assert!(report.signals.is_empty());
    }

    #[tokio::test]
    async fn test_insufficient_index_does_not_abort_others() {
        let config = WatchConfig {
            indexes: vec![
                IndexSpec::new("Nasdaq", "^IXIC"),
                IndexSpec::new("S&P 500", "^GSPC"),
            ],
            ..Default::default()
        };
        let provider =
            StubProvider::new(&[("^IXIC", &[100.0]), ("^GSPC", &[100.0, 102.0])]);
        let engine = RiskEngine::new(provider, config);

        let report = engine.evaluate(false).await.unwrap();

        assert_eq!(report.indexes.len(), 2);
        assert_eq!(report.indexes[0].percent_change, None);
        assert_eq!(report.indexes[1].percent_change, Some(2.0));
    }

    #[tokio::test]
    async fn test_macro_co_occurrence_is_wired_through() {
        let provider = StubProvider::new(&[
            ("^IXIC", &[100.0, 101.0]),
            ("^VIX", &[18.0, 25.0]),
            ("^TNX", &[4.1, 4.2]),
            ("DX-Y.NYB", &[103.0, 102.0]),
        ]);
        let engine = RiskEngine::new(provider, single_index_config());

        let report = engine.evaluate(false).await.unwrap();

        assert_eq!(report.macro_flags.len(), 2);
        assert!(report.has_risk());
    }

    #[tokio::test]
    async fn test_manual_flag_is_carried() {
        let provider = StubProvider::new(&[("^IXIC", &[100.0, 101.0])]);
        let engine = RiskEngine::new(provider, single_index_config());

        let report = engine.evaluate(true).await.unwrap();
        assert!(report.manual);
    }
}

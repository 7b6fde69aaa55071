//! Evaluation result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-index figures computed for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResult {
    pub name: String,
    pub symbol: String,

    /// Day-over-day change in percent; `None` when the series was too short
    pub percent_change: Option<f64>,

    /// Decline from the trailing high in percent; `None` when the series
    /// was too short to evaluate at all
    pub drawdown_from_high: Option<f64>,

    /// Length of the decline streak ending at the latest close
    pub consecutive_down_days: usize,
}

impl IndexResult {
    /// An index whose series could not support any computation
    pub fn insufficient(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            percent_change: None,
            drawdown_from_high: None,
            consecutive_down_days: 0,
        }
    }
}

/// A per-index risk trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RiskSignal {
    /// Deep drawdown from the trailing high combined with a down day
    Drawdown {
        name: String,
        drawdown: f64,
        lookback: usize,
    },

    /// An unbroken run of down days
    ConsecutiveDecline { name: String, days: usize },
}

/// A macro-risk indicator that fired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MacroFlag {
    /// Volatility gauge above its alert level
    ElevatedVolatility { value: f64 },

    /// Long-term yields rising day-over-day
    RisingYields,

    /// Dollar index rising day-over-day
    DollarStrength,
}

/// Everything one invocation computed, handed to the composer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    pub generated_at: DateTime<Utc>,

    /// Whether the run was started on demand rather than by the schedule
    pub manual: bool,

    /// One entry per configured index, in declaration order
    pub indexes: Vec<IndexResult>,

    /// Per-index triggers that fired
    pub signals: Vec<RiskSignal>,

    /// Macro flags; empty unless the co-occurrence threshold was met
    pub macro_flags: Vec<MacroFlag>,
}

impl MarketReport {
    /// True when any per-index trigger or macro flag fired
    pub fn has_risk(&self) -> bool {
        !self.signals.is_empty() || !self.macro_flags.is_empty()
    }
}

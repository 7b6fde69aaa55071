//! Report composition
//!
//! Pure string assembly: turns a [`MarketReport`] into the text pushed to
//! the chat channel. No network or filesystem access here.

use crate::config::WatchConfig;
use crate::engine::{MacroFlag, MarketReport, RiskSignal};

/// Compose the push message for one evaluated run
pub fn compose(report: &MarketReport, config: &WatchConfig) -> String {
    let local = report.generated_at.with_timezone(&config.report_tz);
    let mut lines = vec![format!(
        "📊 US market risk monitor ({})",
        local.format("%Y-%m-%d %H:%M")
    )];

    for index in &report.indexes {
        // Too little data: the line is omitted, not rendered as 0%
        let Some(change) = index.percent_change else {
            continue;
        };
        let emoji = if change > 0.0 { "📈" } else { "📉" };
        lines.push(format!("{emoji} {}: {change:+.2}%", index.name));
    }

    if report.has_risk() {
        lines.push(String::new());
        lines.push("🚨 Risk reminders:".to_string());

        for signal in &report.signals {
            if let RiskSignal::Drawdown {
                name,
                drawdown,
                lookback,
            } = signal
            {
                lines.push(format!(
                    "⚠️ {name} is {:.2}% below its {lookback}-day high and fell again today",
                    drawdown.abs()
                ));
            }
        }

        for signal in &report.signals {
            if let RiskSignal::ConsecutiveDecline { name, days } = signal {
                lines.push(format!("📉 {name} has fallen {days} sessions in a row"));
            }
        }

        if !report.macro_flags.is_empty() {
            lines.push("🌍 Macro risk co-occurrence:".to_string());
            for flag in &report.macro_flags {
                lines.push(match flag {
                    MacroFlag::ElevatedVolatility { value } => {
                        format!("😰 VIX elevated at {value:.2}")
                    }
                    MacroFlag::RisingYields => "📈 10Y Treasury yield climbing".to_string(),
                    MacroFlag::DollarStrength => "💵 Dollar strengthening".to_string(),
                });
            }
        }
    }

    if report.manual {
        lines.push(String::new());
        lines.push("⚙️ Manually triggered run".to_string());
    }

    lines.join("\n")
}

//! Per-index risk arithmetic over daily closing prices

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Day-over-day percentage change of the latest close.
///
/// Returns `None` when fewer than two closes are available, so callers can
/// tell "no signal" apart from a genuine zero change.
pub fn percent_change(closes: &[f64]) -> Option<f64> {
    if closes.len() < 2 {
        return None;
    }
    let last = closes[closes.len() - 1];
    let prev = closes[closes.len() - 2];
    Some(round2((last / prev - 1.0) * 100.0))
}

/// Percentage decline of the latest close from the highest close in the
/// trailing `lookback` window.
///
/// The window includes the latest close, so the result is never positive.
/// Series shorter than `lookback` use whatever is available; callers must
/// supply at least one close.
pub fn drawdown_from_high(closes: &[f64], lookback: usize) -> f64 {
    let window = &closes[closes.len().saturating_sub(lookback)..];
    let high = window.iter().copied().fold(f64::MIN, f64::max);
    let last = window[window.len() - 1];
    round2((last / high - 1.0) * 100.0)
}

/// Length of the decline streak ending at the latest close.
///
/// Counts backward while each close is strictly below its predecessor; a
/// flat or up move at the tail yields 0.
pub fn consecutive_down_days(closes: &[f64]) -> usize {
    let mut count = 0;
    for i in (1..closes.len()).rev() {
        if closes[i] < closes[i - 1] {
            count += 1;
        } else {
            break;
        }
    }
    count
}

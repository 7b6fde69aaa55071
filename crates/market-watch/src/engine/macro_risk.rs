//! Macro-risk co-occurrence evaluation
//!
//! Three independent signals are checked against dedicated auxiliary
//! series. The combined flag set is reported only when at least two fire
//! simultaneously; a single firing signal is suppressed as noise.

use super::result::MacroFlag;

/// Minimum number of simultaneous signals before macro risk is reported
pub const CO_OCCURRENCE_THRESHOLD: usize = 2;

/// Evaluate the three macro signals.
///
/// `volatility`, `long_yield` and `dollar` are daily closes, oldest first.
/// A series too short for its comparison simply does not fire.
pub fn evaluate(
    volatility: &[f64],
    long_yield: &[f64],
    dollar: &[f64],
    vix_threshold: f64,
) -> Vec<MacroFlag> {
    let mut flags = Vec::new();

    if let Some(&vix) = volatility.last() {
        if vix > vix_threshold {
            flags.push(MacroFlag::ElevatedVolatility { value: vix });
        }
    }

    if rose_day_over_day(long_yield) {
        flags.push(MacroFlag::RisingYields);
    }

    if rose_day_over_day(dollar) {
        flags.push(MacroFlag::DollarStrength);
    }

    if flags.len() >= CO_OCCURRENCE_THRESHOLD {
        flags
    } else {
        Vec::new()
    }
}

fn rose_day_over_day(closes: &[f64]) -> bool {
    match closes {
        [.., prev, last] => last > prev,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_signal_is_suppressed() {
        // Only the VIX fires
        let flags = evaluate(&[25.0], &[4.2, 4.1], &[103.0, 102.0], 20.0);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_two_signals_co_occur() {
        let flags = evaluate(&[25.0], &[4.1, 4.2], &[103.0, 102.0], 20.0);
        assert_eq!(flags.len(), 2);
        assert!(matches!(flags[0], MacroFlag::ElevatedVolatility { .. }));
        assert_eq!(flags[1], MacroFlag::RisingYields);
    }

    #[test]
    fn test_all_three_signals() {
        let flags = evaluate(&[18.0, 25.5], &[4.1, 4.2], &[102.0, 103.0], 20.0);
        assert_eq!(flags.len(), 3);
    }

    #[test]
    fn test_no_signals() {
        let flags = evaluate(&[12.0], &[4.2, 4.1], &[103.0, 103.0], 20.0);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_short_series_do_not_fire() {
        // Day-over-day comparisons need two points; the VIX level alone
        // stays below the co-occurrence threshold
        let flags = evaluate(&[25.0], &[4.2], &[], 20.0);
        assert!(flags.is_empty());
    }
}

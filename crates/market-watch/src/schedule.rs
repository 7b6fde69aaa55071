//! Market-close scheduling gate
//!
//! Decides whether a scheduled invocation should run at all. Market
//! holidays are deliberately not modeled: on a holiday weekday the gate
//! opens even though no new closes exist. The next scheduled run simply
//! reports unchanged prices.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::US::Eastern;

/// Hour (24h, US-Eastern) at which the regular session ends
const CLOSE_HOUR: u32 = 16;

/// Whether an invocation should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Market not yet closed, or weekend: skip this invocation
    Pending,
    /// Past close on a weekday, or manually overridden: run
    Proceed,
}

/// Decide whether a run at `now` should proceed.
///
/// A manual invocation always proceeds. Otherwise the run proceeds only at
/// or past the close hour on a US-Eastern weekday; weekends stay
/// [`Gate::Pending`] regardless of the hour.
pub fn decide(now: DateTime<Utc>, manual: bool) -> Gate {
    if manual {
        return Gate::Proceed;
    }

    let eastern = now.with_timezone(&Eastern);
    let is_weekday = !matches!(eastern.weekday(), Weekday::Sat | Weekday::Sun);

    if is_weekday && eastern.hour() >= CLOSE_HOUR {
        Gate::Proceed
    } else {
        Gate::Pending
    }
}

//! Average True Range (ATR).
//!
//! True range per bar: max(high − low, |high − prev_close|, |low − prev_close|),
//! with the first bar falling back to high − low (no previous close).
//! ATR is the rolling mean of true range over `period`, first valid at
//! index `period - 1`.

use crate::domain::Bar;
use crate::indicators::sma;

/// ATR of `bars` over `period`.
pub fn atr(bars: &[Bar], period: usize) -> Vec<f64> {
    let true_ranges: Vec<f64> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let high_low = bar.high - bar.low;
            if i == 0 {
                high_low
            } else {
                let prev_close = bars[i - 1].close;
                high_low
                    .max((bar.high - prev_close).abs())
                    .max((bar.low - prev_close).abs())
            }
        })
        .collect();

    sma(&true_ranges, period)
}

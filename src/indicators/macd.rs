//! Moving Average Convergence Divergence (MACD).
//!
//! macd_line = EMA(fast) − EMA(slow)
//! signal_line = EMA(macd_line, signal_period)
//! histogram = macd_line − signal_line

use crate::indicators::ema;

/// The three MACD component series, all aligned to the input index.
#[derive(Debug, Clone)]
pub struct Macd {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// MACD of `values` with the given fast/slow/signal periods.
pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> Macd {
    let ema_fast = ema(values, fast);
    let ema_slow = ema(values, slow);

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema(&macd_line, signal);
    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| m - s)
        .collect();

    Macd {
        macd_line,
        signal_line,
        histogram,
    }
}

//! Bollinger Bands.
//!
//! middle = SMA(period); upper/lower = middle ± k · rolling sample std.
//! All three bands share the SMA warmup: NaN before index `period - 1`.

use crate::indicators::{rolling_std, sma};

/// The three Bollinger band series, aligned to the input index.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Bollinger bands of `values` over `period` with width multiplier `k`.
pub fn bollinger(values: &[f64], period: usize, k: f64) -> BollingerBands {
    let middle = sma(values, period);
    let std = rolling_std(values, period);

    let upper: Vec<f64> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m + k * s)
        .collect();
    let lower: Vec<f64> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m - k * s)
        .collect();

    BollingerBands {
        middle,
        upper,
        lower,
    }
}

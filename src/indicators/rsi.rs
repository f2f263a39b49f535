//! Relative Strength Index (RSI).
//!
//! Rolling-mean flavor: average gain and average loss are plain rolling
//! means over the last `period` period-over-period differences.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//! First valid value at index `period` (the first difference sits at index 1).
//! Edge case: avg_loss == 0 → RSI = 100 (including the flat-series case where
//! avg_gain is also 0).

/// RSI of `values` over `period` differences.
pub fn rsi(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n < period + 1 {
        return result;
    }

    // Per-step gains and losses; index 0 has no difference.
    let mut gains = vec![f64::NAN; n];
    let mut losses = vec![f64::NAN; n];
    for i in 1..n {
        let change = values[i] - values[i - 1];
        if change.is_nan() {
            continue;
        }
        gains[i] = change.max(0.0);
        losses[i] = (-change).max(0.0);
    }

    for i in period..n {
        let gain_window = &gains[(i + 1 - period)..=i];
        let loss_window = &losses[(i + 1 - period)..=i];
        if gain_window.iter().any(|v| v.is_nan()) {
            continue;
        }
        let avg_gain = gain_window.iter().sum::<f64>() / period as f64;
        let avg_loss = loss_window.iter().sum::<f64>() / period as f64;

        result[i] = if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        };
    }

    result
}

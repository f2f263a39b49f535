//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * value[t] + (1 - alpha) * EMA[t-1]
//! with alpha = 2 / (period + 1), seeded by the first value.
//! No bias correction, so the series is defined from index 0.

/// Exponential moving average of `values` with smoothing 2/(period+1).
///
/// Once a NaN input appears, every subsequent output is NaN (the recursion
/// is tainted and cannot recover).
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n == 0 {
        return result;
    }

    let alpha = 2.0 / (period as f64 + 1.0);

    if values[0].is_nan() {
        return result;
    }
    result[0] = values[0];
    let mut prev = values[0];

    for i in 1..n {
        if values[i].is_nan() {
            return result;
        }
        let next = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = next;
        prev = next;
    }

    result
}

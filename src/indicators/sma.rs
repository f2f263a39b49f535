//! Simple Moving Average (SMA).
//!
//! Rolling arithmetic mean over a `period`-wide window.
//! First valid value at index `period - 1`.

/// Rolling mean of `values` over `period`. NaN for the first `period - 1`
/// entries and for any window containing NaN.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n < period {
        return result;
    }

    for i in (period - 1)..n {
        let window = &values[(i + 1 - period)..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        result[i] = window.iter().sum::<f64>() / period as f64;
    }

    result
}

//! Rolling standard deviation.
//!
//! Sample standard deviation (n − 1 denominator) over the same window
//! convention as SMA: first valid value at index `period - 1`.
//! Windows of a single observation have no degrees of freedom, so
//! `period < 2` yields all NaN.

/// Rolling sample standard deviation of `values` over `period`.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period < 2 || n < period {
        return result;
    }

    for i in (period - 1)..n {
        let window = &values[(i + 1 - period)..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        let mean = window.iter().sum::<f64>() / period as f64;
        let var = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period as f64 - 1.0);
        result[i] = var.sqrt();
    }

    result
}

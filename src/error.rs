//! Construction-time error taxonomy.
//!
//! Configuration problems fail fast, before any bar is scanned. Data-quality
//! problems live in [`crate::data::DataError`]; numeric edge cases inside the
//! scans resolve to documented sentinel values and never surface as errors.

use thiserror::Error;

/// Invalid strategy or backtester parameters, rejected at construction.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive number of bars, got {value}")]
    NonPositivePeriod { name: &'static str, value: usize },

    #[error("{name} must be positive, got {value}")]
    NonPositiveMultiplier { name: &'static str, value: f64 },

    #[error("fast period ({fast}) must be less than slow period ({slow})")]
    FastNotBelowSlow { fast: usize, slow: usize },

    #[error("RSI thresholds must satisfy 0 <= oversold < overbought <= 100, got oversold={oversold}, overbought={overbought}")]
    InvalidRsiThresholds { oversold: f64, overbought: f64 },

    #[error("histogram threshold must be a finite number, got {value}")]
    NonFiniteThreshold { value: f64 },

    #[error("combined strategy needs at least two sub-strategies, got {count}")]
    TooFewStrategies { count: usize },

    #[error("initial capital must be positive, got {value}")]
    NonPositiveCapital { value: f64 },
}

/// Shared guard: a window/period parameter must be at least one bar.
pub(crate) fn require_positive_period(
    name: &'static str,
    value: usize,
) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NonPositivePeriod { name, value });
    }
    Ok(())
}

/// Shared guard: a multiplier/threshold must be a positive finite number.
pub(crate) fn require_positive_multiplier(
    name: &'static str,
    value: f64,
) -> Result<(), ConfigError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(ConfigError::NonPositiveMultiplier { name, value });
    }
    Ok(())
}

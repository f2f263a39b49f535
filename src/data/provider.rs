//! Data source trait and structured error types.
//!
//! Abstracts over wherever bars come from (exchange API bridges, CSV
//! exports, fixtures) so the engine can stay I/O-free and tests can feed
//! synthetic series.

use thiserror::Error;

use crate::domain::Bar;

/// What to fetch: an exchange identifier, a trading-pair symbol, a
/// timeframe code (e.g. `"1h"`, `"1d"`) and a row limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub exchange: String,
    pub symbol: String,
    pub timeframe: String,
    pub limit: usize,
}

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data unavailable: {0}")]
    Unavailable(String),

    #[error("empty series — the fetch returned no bars")]
    EmptySeries,

    #[error("timestamps must be strictly increasing (violation at row {index})")]
    NonMonotonicTimestamps { index: usize },

    #[error("invalid OHLCV values at row {index}")]
    InvalidBar { index: usize },

    #[error("unparseable timestamp: {value}")]
    ParseTimestamp { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// An opaque provider of ordered, gap-tolerant bar series.
///
/// Implementations must return bars with strictly increasing timestamps and
/// surface an empty or failed fetch as a [`DataError`] rather than an empty
/// vector.
pub trait MarketDataSource {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<Bar>, DataError>;
}

/// Validate what the engine requires of a series: non-empty, strictly
/// increasing unique timestamps, sane OHLCV fields.
pub fn validate_series(bars: &[Bar]) -> Result<(), DataError> {
    if bars.is_empty() {
        return Err(DataError::EmptySeries);
    }
    for (index, bar) in bars.iter().enumerate() {
        if !bar.is_sane() {
            return Err(DataError::InvalidBar { index });
        }
        if index > 0 && bar.timestamp <= bars[index - 1].timestamp {
            return Err(DataError::NonMonotonicTimestamps { index });
        }
    }
    Ok(())
}

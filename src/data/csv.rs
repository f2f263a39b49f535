//! CSV-backed data source.
//!
//! Reads `timestamp,open,high,low,close,volume` rows where `timestamp` is a
//! millisecond Unix epoch (the common exchange-export format). One file is
//! one symbol/timeframe; the request's exchange, symbol and timeframe
//! fields are bookkeeping for the caller, only `limit` is applied here
//! (keeping the most recent rows).

use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use serde::Deserialize;

use crate::domain::Bar;

use super::provider::{validate_series, DataError, FetchRequest, MarketDataSource};

#[derive(Debug, Deserialize)]
struct CsvRow {
    timestamp: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// File-backed [`MarketDataSource`].
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MarketDataSource for CsvSource {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<Bar>, DataError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut bars = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row?;
            let timestamp = Utc
                .timestamp_millis_opt(row.timestamp)
                .single()
                .ok_or_else(|| DataError::ParseTimestamp {
                    value: row.timestamp.to_string(),
                })?;
            bars.push(Bar {
                timestamp,
                open: row.open,
                high: row.high,
                low: row.low,
                close: row.close,
                volume: row.volume,
            });
        }

        if request.limit > 0 && bars.len() > request.limit {
            bars.drain(..bars.len() - request.limit);
        }

        validate_series(&bars)?;
        Ok(bars)
    }
}

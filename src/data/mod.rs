//! Market data interface.
//!
//! The engine never fetches data itself; it consumes an ordered bar series
//! produced by a [`MarketDataSource`] collaborator and validates only what
//! it directly requires (non-empty, strictly increasing timestamps, sane
//! OHLCV fields).

pub mod csv;
pub mod provider;

pub use csv::CsvSource;
pub use provider::{validate_series, DataError, FetchRequest, MarketDataSource};

//! PortfolioSnapshot — one equity-curve point per bar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Portfolio value at one bar, whether or not a signal fired there.
///
/// A backtest produces exactly one snapshot per input bar, so the equity
/// curve aligns 1:1 with the bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

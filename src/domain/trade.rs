//! Trade — one leg of the backtester's append-only ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a ledger row opens or closes a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeKind {
    Entry,
    Exit,
}

/// One executed trade leg.
///
/// `size` is the asset quantity held (positive), `portfolio_value` the
/// mark-to-market value at execution. `pnl` is realized profit and is only
/// present on exits: (exit_price − entry_price) × size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub kind: TradeKind,
    pub time: DateTime<Utc>,
    pub price: f64,
    pub size: f64,
    pub portfolio_value: f64,
    pub pnl: Option<f64>,
}

impl Trade {
    /// True for an exit leg that realized a positive pnl.
    pub fn is_win(&self) -> bool {
        matches!(self.pnl, Some(p) if p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entry_is_not_a_win() {
        let trade = Trade {
            kind: TradeKind::Entry,
            time: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            price: 100.0,
            size: 10.0,
            portfolio_value: 1000.0,
            pnl: None,
        };
        assert!(!trade.is_win());
    }

    #[test]
    fn exit_win_requires_positive_pnl() {
        let mut trade = Trade {
            kind: TradeKind::Exit,
            time: Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 0).unwrap(),
            price: 110.0,
            size: 10.0,
            portfolio_value: 1100.0,
            pnl: Some(100.0),
        };
        assert!(trade.is_win());
        trade.pnl = Some(0.0);
        assert!(!trade.is_win());
    }
}

//! Strategy variants — state machines over the bar sequence.
//!
//! Every strategy scans the bars once in timestamp order, keeping a local
//! Flat/Open flag, and emits a chronological signal list that strictly
//! alternates BUY/SELL starting with BUY. The one exception is [`Combined`],
//! whose merged output can break alternation (see its module docs). The
//! backtester tolerates that by ignoring signals that do not apply to its
//! own position state.
//!
//! `generate_signals` is pure: no state survives between calls, so repeated
//! calls on the same series yield identical output.

pub mod bollinger;
pub mod combined;
pub mod config;
pub mod ma_crossover;
pub mod macd;
pub mod rsi;

pub use bollinger::BollingerReversion;
pub use combined::{CombineMethod, Combined};
pub use config::StrategyConfig;
pub use ma_crossover::MaCrossover;
pub use macd::MacdStrategy;
pub use rsi::RsiStrategy;

use serde::{Deserialize, Serialize};

use crate::domain::{Bar, Signal, SignalAction};

/// The closed strategy interface.
///
/// `Send + Sync` so callers can run independent backtests across threads;
/// implementations hold only their parameters, never per-run state.
pub trait Strategy: Send + Sync {
    /// Human-readable strategy name for reports.
    fn name(&self) -> &str;

    /// Scan `bars` and return the chronologically ordered signal list.
    fn generate_signals(&self, bars: &[Bar]) -> Vec<Signal>;

    /// Quick signal-level summary: per-round-trip percentage returns,
    /// without simulating capital (use the backtester for that).
    fn compute_metrics(&self, bars: &[Bar]) -> StrategySummary {
        summarize_signals(&self.generate_signals(bars))
    }
}

/// Signal-level performance summary.
///
/// `total_returns` and `avg_return` are in percent per round trip;
/// `win_rate` is a fraction in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub total_returns: f64,
    pub win_rate: f64,
    pub avg_return: f64,
}

impl StrategySummary {
    fn zero() -> Self {
        Self {
            total_returns: 0.0,
            win_rate: 0.0,
            avg_return: 0.0,
        }
    }
}

/// Pair each BUY with the next SELL and summarize the percentage returns.
pub fn summarize_signals(signals: &[Signal]) -> StrategySummary {
    let mut returns = Vec::new();
    let mut entry_price: Option<f64> = None;

    for signal in signals {
        match signal.action {
            SignalAction::Buy => {
                if entry_price.is_none() {
                    entry_price = Some(signal.price);
                }
            }
            SignalAction::Sell => {
                if let Some(entry) = entry_price.take() {
                    returns.push((signal.price - entry) / entry * 100.0);
                }
            }
        }
    }

    if returns.is_empty() {
        return StrategySummary::zero();
    }

    let total: f64 = returns.iter().sum();
    let wins = returns.iter().filter(|&&r| r > 0.0).count();
    StrategySummary {
        total_returns: total,
        win_rate: wins as f64 / returns.len() as f64,
        avg_return: total / returns.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn signal(day: i64, price: f64, action: SignalAction) -> Signal {
        let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        Signal {
            timestamp: base + Duration::days(day),
            price,
            action,
            indicator: String::new(),
        }
    }

    #[test]
    fn summary_of_no_signals_is_zero() {
        assert_eq!(summarize_signals(&[]), StrategySummary::zero());
    }

    #[test]
    fn summary_pairs_round_trips() {
        let signals = vec![
            signal(0, 100.0, SignalAction::Buy),
            signal(5, 110.0, SignalAction::Sell),
            signal(8, 100.0, SignalAction::Buy),
            signal(12, 95.0, SignalAction::Sell),
        ];
        let summary = summarize_signals(&signals);
        assert!((summary.total_returns - 5.0).abs() < 1e-10);
        assert!((summary.win_rate - 0.5).abs() < 1e-10);
        assert!((summary.avg_return - 2.5).abs() < 1e-10);
    }

    #[test]
    fn summary_ignores_unmatched_trailing_buy() {
        let signals = vec![
            signal(0, 100.0, SignalAction::Buy),
            signal(3, 120.0, SignalAction::Sell),
            signal(7, 90.0, SignalAction::Buy),
        ];
        let summary = summarize_signals(&signals);
        assert!((summary.total_returns - 20.0).abs() < 1e-10);
        assert!((summary.win_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn summary_ignores_leading_sell() {
        // Merged (combined) streams can open with a SELL; it pairs with nothing.
        let signals = vec![
            signal(0, 100.0, SignalAction::Sell),
            signal(2, 80.0, SignalAction::Buy),
            signal(6, 88.0, SignalAction::Sell),
        ];
        let summary = summarize_signals(&signals);
        assert!((summary.total_returns - 10.0).abs() < 1e-10);
    }
}

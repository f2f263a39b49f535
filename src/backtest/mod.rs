//! Backtester — replays a strategy's signals against capital.
//!
//! One linear pass over the bars: at each bar, any signals stamped with that
//! bar's timestamp are applied in signal-list order (a BUY while flat
//! converts all cash into the asset at the close; a SELL while long
//! liquidates fully), then one portfolio snapshot is appended whether or not
//! anything fired. Long-only, full-position sizing, no fees or slippage.
//!
//! Each `run` call returns a fresh [`BacktestReport`]; the backtester holds
//! no per-run state, so one instance may run many series, and independent
//! instances may run in parallel.

pub mod metrics;

use serde::Serialize;

use crate::domain::{Bar, PortfolioSnapshot, Position, Signal, SignalAction, Trade, TradeKind};
use crate::error::ConfigError;
use crate::strategies::Strategy;

pub use metrics::BacktestMetrics;

/// Everything one backtest run produced.
#[derive(Debug, Clone, Serialize)]
pub struct BacktestReport {
    pub metrics: BacktestMetrics,
    pub trades: Vec<Trade>,
    pub equity: Vec<PortfolioSnapshot>,
    pub signals: Vec<Signal>,
}

pub struct Backtester {
    strategy: Box<dyn Strategy>,
    initial_capital: f64,
}

impl Backtester {
    pub fn new(strategy: Box<dyn Strategy>, initial_capital: f64) -> Result<Self, ConfigError> {
        if !(initial_capital > 0.0) || !initial_capital.is_finite() {
            return Err(ConfigError::NonPositiveCapital {
                value: initial_capital,
            });
        }
        Ok(Self {
            strategy,
            initial_capital,
        })
    }

    /// Replay `bars` once and return the result bundle.
    ///
    /// An empty series is not an error: the report carries zero metrics, an
    /// empty ledger and an empty equity curve.
    pub fn run(&self, bars: &[Bar]) -> BacktestReport {
        let signals = self.strategy.generate_signals(bars);

        let mut capital = self.initial_capital;
        let mut position = Position::Flat;
        let mut trades: Vec<Trade> = Vec::new();
        let mut equity: Vec<PortfolioSnapshot> = Vec::with_capacity(bars.len());

        // Signals are chronological and stamped with bar timestamps, so a
        // single cursor suffices.
        let mut cursor = 0;

        for bar in bars {
            while cursor < signals.len() && signals[cursor].timestamp <= bar.timestamp {
                let signal = &signals[cursor];
                cursor += 1;
                if signal.timestamp < bar.timestamp {
                    continue;
                }

                match (signal.action, position) {
                    (SignalAction::Buy, Position::Flat) => {
                        let size = capital / bar.close;
                        position = Position::Long {
                            entry_price: bar.close,
                            size,
                        };
                        trades.push(Trade {
                            kind: TradeKind::Entry,
                            time: bar.timestamp,
                            price: bar.close,
                            size,
                            portfolio_value: size * bar.close,
                            pnl: None,
                        });
                    }
                    (SignalAction::Sell, Position::Long { entry_price, size }) => {
                        let value = size * bar.close;
                        capital = value;
                        trades.push(Trade {
                            kind: TradeKind::Exit,
                            time: bar.timestamp,
                            price: bar.close,
                            size,
                            portfolio_value: value,
                            pnl: Some((bar.close - entry_price) * size),
                        });
                        position = Position::Flat;
                    }
                    // A BUY while long or a SELL while flat does not apply;
                    // combined strategies can legitimately produce these.
                    _ => {}
                }
            }

            let value = match position {
                Position::Flat => capital,
                Position::Long { size, .. } => size * bar.close,
            };
            equity.push(PortfolioSnapshot {
                timestamp: bar.timestamp,
                value,
            });
        }

        let values: Vec<f64> = equity.iter().map(|s| s.value).collect();
        BacktestReport {
            metrics: BacktestMetrics::compute(&values, &trades, self.initial_capital),
            trades,
            equity,
            signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;
    use crate::strategies::MaCrossover;

    #[test]
    fn rejects_non_positive_capital() {
        for capital in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let result = Backtester::new(Box::new(MaCrossover::default_params()), capital);
            assert!(result.is_err(), "capital {capital} should be rejected");
        }
    }

    #[test]
    fn snapshot_count_matches_bar_count() {
        let bars = make_bars(&[100.0; 60]);
        let backtester =
            Backtester::new(Box::new(MaCrossover::new(2, 4).unwrap()), 10_000.0).unwrap();
        let report = backtester.run(&bars);
        assert_eq!(report.equity.len(), bars.len());
    }

    #[test]
    fn flat_series_keeps_capital_constant() {
        let bars = make_bars(&[100.0; 60]);
        let backtester =
            Backtester::new(Box::new(MaCrossover::new(2, 4).unwrap()), 10_000.0).unwrap();
        let report = backtester.run(&bars);
        assert!(report.trades.is_empty());
        assert!(report.equity.iter().all(|s| s.value == 10_000.0));
        assert_eq!(report.metrics.total_return, 0.0);
    }

    #[test]
    fn rerun_is_independent() {
        // No state accumulates across runs: two runs over the same bars
        // produce identical reports.
        let closes: Vec<f64> = (0..80)
            .map(|i| 100.0 + (i as f64 * 0.4).sin() * 15.0)
            .collect();
        let bars = make_bars(&closes);
        let backtester =
            Backtester::new(Box::new(MaCrossover::new(3, 8).unwrap()), 10_000.0).unwrap();
        let first = backtester.run(&bars);
        let second = backtester.run(&bars);
        assert_eq!(first.trades, second.trades);
        assert_eq!(first.metrics, second.metrics);
        assert_eq!(first.equity, second.equity);
    }
}

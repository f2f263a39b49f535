//! Performance metrics — pure functions over the equity curve and ledger.
//!
//! Every metric is a pure function: equity values and/or trade list in,
//! scalar out. Division-by-zero conditions (zero variance, no exits, empty
//! curve) resolve to 0, never to NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::domain::{Trade, TradeKind};

/// Annual risk-free rate used for excess returns in the Sharpe ratio.
pub const RISK_FREE_RATE: f64 = 0.02;

/// Bars per year assumed when annualizing (daily convention).
pub const PERIODS_PER_YEAR: f64 = 252.0;

/// Aggregate performance metrics for a single backtest run.
///
/// `total_return`, `max_drawdown` and `win_rate` are percentages;
/// `total_trades` counts completed round trips (exits only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacktestMetrics {
    pub total_return: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    pub win_rate: f64,
    pub total_trades: usize,
}

impl BacktestMetrics {
    /// Compute all metrics from a per-bar equity curve and trade ledger.
    ///
    /// An empty curve yields the all-zero default, not an error.
    pub fn compute(equity: &[f64], trades: &[Trade], initial_capital: f64) -> Self {
        if equity.is_empty() {
            return Self::default();
        }
        Self {
            total_return: total_return(equity, initial_capital),
            sharpe_ratio: sharpe_ratio(equity, RISK_FREE_RATE),
            max_drawdown: max_drawdown(equity),
            win_rate: win_rate(trades),
            total_trades: exit_count(trades),
        }
    }
}

/// Total return in percent, measured against starting capital.
pub fn total_return(equity: &[f64], initial_capital: f64) -> f64 {
    match equity.last() {
        Some(&final_value) if initial_capital > 0.0 => {
            (final_value - initial_capital) / initial_capital * 100.0
        }
        _ => 0.0,
    }
}

/// Annualized Sharpe ratio of per-bar excess returns.
///
/// Excess return subtracts `annual_risk_free / 252` per bar. Defined as 0
/// when fewer than 2 return observations exist or the return variance is
/// zero.
pub fn sharpe_ratio(equity: &[f64], annual_risk_free: f64) -> f64 {
    let returns = bar_returns(equity);
    if returns.len() < 2 {
        return 0.0;
    }
    let per_bar_rf = annual_risk_free / PERIODS_PER_YEAR;
    let excess: Vec<f64> = returns.iter().map(|r| r - per_bar_rf).collect();
    let mean = mean(&excess);
    let std = sample_std(&excess);
    if std < 1e-15 {
        return 0.0;
    }
    PERIODS_PER_YEAR.sqrt() * mean / std
}

/// Maximum drawdown in percent: the worst peak-to-trough decline of the
/// equity curve. 0 for flat or monotonically rising curves.
pub fn max_drawdown(equity: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut worst = 0.0_f64;
    for &value in equity {
        peak = peak.max(value);
        if peak > 0.0 {
            worst = worst.max((peak - value) / peak);
        }
    }
    worst * 100.0
}

/// Percentage of exits with positive realized pnl. 0 when there are no
/// exits.
pub fn win_rate(trades: &[Trade]) -> f64 {
    let exits = exit_count(trades);
    if exits == 0 {
        return 0.0;
    }
    let wins = trades.iter().filter(|t| t.is_win()).count();
    wins as f64 / exits as f64 * 100.0
}

/// Completed round trips: exit legs only, entries are not counted.
pub fn exit_count(trades: &[Trade]) -> usize {
    trades
        .iter()
        .filter(|t| t.kind == TradeKind::Exit)
        .count()
}

/// Per-bar simple returns of the equity curve (length n − 1).
fn bar_returns(equity: &[f64]) -> Vec<f64> {
    equity
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator).
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0);
    var.sqrt()
}

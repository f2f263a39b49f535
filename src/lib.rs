//! siglab — strategy/signal engine and backtesting simulator.
//!
//! Turns a price-bar series into discrete BUY/SELL signals via pluggable
//! strategies, and simulates the historical performance of following those
//! signals against capital:
//! - Domain types (bars, signals, trades, portfolio snapshots)
//! - Rolling indicator functions (SMA, EMA, RSI, ATR, MACD, Bollinger)
//! - Strategy trait with five variants, including AND/OR combination
//! - Backtester producing an equity curve, trade ledger and metrics
//! - Data source trait with a CSV-file implementation
//!
//! The engine is single-threaded and synchronous: each `generate_signals`
//! or `run` call is one linear pass with no I/O. Calls are independent, so
//! callers may run backtests over different series in parallel with one
//! backtester per run.

pub mod backtest;
pub mod data;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod strategies;

pub use backtest::{BacktestMetrics, BacktestReport, Backtester};
pub use domain::{Bar, PortfolioSnapshot, Signal, SignalAction, Trade, TradeKind};
pub use error::ConfigError;
pub use strategies::{Strategy, StrategyConfig};

//! Moving average crossover strategy.
//!
//! Holds a discrete signal value per bar: +1 while the short SMA is above
//! the long SMA, −1 while below, carried over when equal. A change in that
//! value between consecutive bars is a crossing; a crossing to +1 while flat
//! emits BUY, a crossing to −1 while open emits SELL. Nothing is emitted
//! before both SMAs are defined.

use crate::domain::{Bar, Signal, SignalAction};
use crate::error::{require_positive_period, ConfigError};
use crate::indicators::sma;

use super::Strategy;

#[derive(Debug, Clone, PartialEq)]
pub struct MaCrossover {
    short_window: usize,
    long_window: usize,
}

impl MaCrossover {
    pub fn new(short_window: usize, long_window: usize) -> Result<Self, ConfigError> {
        require_positive_period("short_window", short_window)?;
        require_positive_period("long_window", long_window)?;
        if short_window >= long_window {
            return Err(ConfigError::FastNotBelowSlow {
                fast: short_window,
                slow: long_window,
            });
        }
        Ok(Self {
            short_window,
            long_window,
        })
    }

    /// 20/50, the conventional daily setup.
    pub fn default_params() -> Self {
        Self {
            short_window: 20,
            long_window: 50,
        }
    }
}

impl Strategy for MaCrossover {
    fn name(&self) -> &str {
        "MA Crossover"
    }

    fn generate_signals(&self, bars: &[Bar]) -> Vec<Signal> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let short = sma(&closes, self.short_window);
        let long = sma(&closes, self.long_window);

        let mut signals = Vec::new();
        let mut prev_state = 0i8;
        let mut open = false;

        for (i, bar) in bars.iter().enumerate() {
            if short[i].is_nan() || long[i].is_nan() {
                continue;
            }

            let state = if short[i] > long[i] {
                1
            } else if short[i] < long[i] {
                -1
            } else {
                prev_state
            };

            if state != prev_state {
                let indicator = format!("Short MA: {:.2}, Long MA: {:.2}", short[i], long[i]);
                if state == 1 && !open {
                    signals.push(Signal {
                        timestamp: bar.timestamp,
                        price: bar.close,
                        action: SignalAction::Buy,
                        indicator,
                    });
                    open = true;
                } else if state == -1 && open {
                    signals.push(Signal {
                        timestamp: bar.timestamp,
                        price: bar.close,
                        action: SignalAction::Sell,
                        indicator,
                    });
                    open = false;
                }
            }
            prev_state = state;
        }

        signals
    }
}

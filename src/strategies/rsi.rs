//! RSI threshold strategy.
//!
//! Discrete signal value per bar: +1 while RSI is below the oversold
//! threshold, −1 while above the overbought threshold, carried over in the
//! neutral zone. Same crossing/emission rule as the MA crossover: crossings
//! to +1 while flat emit BUY, crossings to −1 while open emit SELL.

use crate::domain::{Bar, Signal, SignalAction};
use crate::error::{require_positive_period, ConfigError};
use crate::indicators::rsi;

use super::Strategy;

#[derive(Debug, Clone)]
pub struct RsiStrategy {
    period: usize,
    overbought: f64,
    oversold: f64,
}

impl RsiStrategy {
    pub fn new(period: usize, overbought: f64, oversold: f64) -> Result<Self, ConfigError> {
        require_positive_period("period", period)?;
        if !(0.0..=100.0).contains(&oversold)
            || !(0.0..=100.0).contains(&overbought)
            || oversold >= overbought
        {
            return Err(ConfigError::InvalidRsiThresholds {
                oversold,
                overbought,
            });
        }
        Ok(Self {
            period,
            overbought,
            oversold,
        })
    }

    /// 14-period RSI with the classic 70/30 thresholds.
    pub fn default_params() -> Self {
        Self {
            period: 14,
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

impl Strategy for RsiStrategy {
    fn name(&self) -> &str {
        "RSI Strategy"
    }

    fn generate_signals(&self, bars: &[Bar]) -> Vec<Signal> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let rsi_values = rsi(&closes, self.period);

        let mut signals = Vec::new();
        let mut prev_state = 0i8;
        let mut open = false;

        for (i, bar) in bars.iter().enumerate() {
            if rsi_values[i].is_nan() {
                continue;
            }

            let state = if rsi_values[i] < self.oversold {
                1
            } else if rsi_values[i] > self.overbought {
                -1
            } else {
                prev_state
            };

            if state != prev_state {
                let indicator = format!("RSI: {:.2}", rsi_values[i]);
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

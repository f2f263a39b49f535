//! MACD histogram crossing strategy.
//!
//! Two-state machine over the MACD histogram. While flat, entry fires when
//! the histogram crosses upward through −threshold with the MACD line above
//! the signal line; while open, exit fires when the histogram crosses
//! downward through +threshold with the MACD line below the signal line.

use crate::domain::{Bar, Signal, SignalAction};
use crate::error::{require_positive_period, ConfigError};
use crate::indicators::macd;

use super::Strategy;

#[derive(Debug, Clone, PartialEq)]
pub struct MacdStrategy {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    histogram_threshold: f64,
}

impl MacdStrategy {
    pub fn new(
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
        histogram_threshold: f64,
    ) -> Result<Self, ConfigError> {
        require_positive_period("fast_period", fast_period)?;
        require_positive_period("slow_period", slow_period)?;
        require_positive_period("signal_period", signal_period)?;
        if fast_period >= slow_period {
            return Err(ConfigError::FastNotBelowSlow {
                fast: fast_period,
                slow: slow_period,
            });
        }
        if !histogram_threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold {
                value: histogram_threshold,
            });
        }
        Ok(Self {
            fast_period,
            slow_period,
            signal_period,
            histogram_threshold,
        })
    }

    /// The classic 12/26/9 setup with no histogram deadband.
    pub fn default_params() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
            histogram_threshold: 0.0,
        }
    }
}

impl Strategy for MacdStrategy {
    fn name(&self) -> &str {
        "MACD"
    }

    fn generate_signals(&self, bars: &[Bar]) -> Vec<Signal> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let components = macd(
            &closes,
            self.fast_period,
            self.slow_period,
            self.signal_period,
        );

        let mut signals = Vec::new();
        let mut open = false;
        let threshold = self.histogram_threshold;

        for i in 1..bars.len() {
            if components.macd_line[i].is_nan() || components.signal_line[i].is_nan() {
                continue;
            }
            let prev_hist = components.histogram[i - 1];
            let curr_hist = components.histogram[i];
            if prev_hist.is_nan() {
                continue;
            }

            let indicator = || {
                format!(
                    "MACD: {:.2}, Signal: {:.2}, Hist: {:.2}",
                    components.macd_line[i], components.signal_line[i], curr_hist
                )
            };

            if !open {
                // Bullish: histogram crosses up through -threshold while
                // the MACD line leads the signal line.
                if prev_hist < -threshold
                    && curr_hist >= -threshold
                    && components.macd_line[i] > components.signal_line[i]
                {
                    signals.push(Signal {
                        timestamp: bars[i].timestamp,
                        price: bars[i].close,
                        action: SignalAction::Buy,
                        indicator: indicator(),
                    });
                    open = true;
                }
            } else if prev_hist > threshold
                && curr_hist <= threshold
                && components.macd_line[i] < components.signal_line[i]
            {
                signals.push(Signal {
                    timestamp: bars[i].timestamp,
                    price: bars[i].close,
                    action: SignalAction::Sell,
                    indicator: indicator(),
                });
                open = false;
            }
        }

        signals
    }
}

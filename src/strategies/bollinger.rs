//! Bollinger band mean-reversion strategy.
//!
//! Explicit two-state machine. While flat, a close below the lower band
//! opens a position; while open, a close above the upper band exits, or —
//! when ATR exits are enabled — a close below the stop recorded at entry
//! (entry price − ATR · multiplier) exits first.

use crate::domain::{Bar, Signal, SignalAction};
use crate::error::{require_positive_multiplier, require_positive_period, ConfigError};
use crate::indicators::{atr, bollinger};

use super::Strategy;

#[derive(Debug, Clone)]
pub struct BollingerReversion {
    period: usize,
    std_dev: f64,
    use_atr_exits: bool,
    atr_period: usize,
    atr_multiplier: f64,
}

impl BollingerReversion {
    pub fn new(
        period: usize,
        std_dev: f64,
        use_atr_exits: bool,
        atr_period: usize,
        atr_multiplier: f64,
    ) -> Result<Self, ConfigError> {
        require_positive_period("period", period)?;
        require_positive_period("atr_period", atr_period)?;
        require_positive_multiplier("std_dev", std_dev)?;
        require_positive_multiplier("atr_multiplier", atr_multiplier)?;
        Ok(Self {
            period,
            std_dev,
            use_atr_exits,
            atr_period,
            atr_multiplier,
        })
    }

    /// 20-period bands at 2 std, 14-period ATR stop at 2×.
    pub fn default_params() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
            use_atr_exits: true,
            atr_period: 14,
            atr_multiplier: 2.0,
        }
    }
}

impl Strategy for BollingerReversion {
    fn name(&self) -> &str {
        "Bollinger Bands"
    }

    fn generate_signals(&self, bars: &[Bar]) -> Vec<Signal> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let bands = bollinger(&closes, self.period, self.std_dev);
        let atr_values = if self.use_atr_exits {
            atr(bars, self.atr_period)
        } else {
            Vec::new()
        };

        let mut signals = Vec::new();
        let mut open = false;
        let mut stop_loss: Option<f64> = None;

        for (i, bar) in bars.iter().enumerate() {
            if bands.upper[i].is_nan() || bands.lower[i].is_nan() {
                continue;
            }
            let price = bar.close;

            if !open {
                if price < bands.lower[i] {
                    let indicator = if self.use_atr_exits {
                        stop_loss = Some(price - atr_values[i] * self.atr_multiplier);
                        format!("BB Lower: {:.2}, ATR: {:.2}", bands.lower[i], atr_values[i])
                    } else {
                        format!("BB Lower: {:.2}", bands.lower[i])
                    };
                    signals.push(Signal {
                        timestamp: bar.timestamp,
                        price,
                        action: SignalAction::Buy,
                        indicator,
                    });
                    open = true;
                }
            } else {
                // Comparison against a NaN stop (ATR still warming up at
                // entry) is false, which quietly disables the stop leg.
                let stop_hit = self.use_atr_exits
                    && stop_loss.map_or(false, |stop| price < stop);

                let exit_reason = if price > bands.upper[i] {
                    Some("Upper Band")
                } else if stop_hit {
                    Some("Stop Loss")
                } else {
                    None
                };

                if let Some(reason) = exit_reason {
                    signals.push(Signal {
                        timestamp: bar.timestamp,
                        price,
                        action: SignalAction::Sell,
                        indicator: format!("Exit - {reason}"),
                    });
                    open = false;
                    stop_loss = None;
                }
            }
        }

        signals
    }
}

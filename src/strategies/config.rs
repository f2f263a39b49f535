//! Tagged strategy configuration.
//!
//! Replaces loosely-typed parameter mappings with one explicit variant per
//! strategy kind: named fields, validated once through the variant's
//! constructor when `build` is called. Serde-tagged so callers can describe
//! a strategy (including nested combinations) in JSON.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::{
    BollingerReversion, CombineMethod, Combined, MaCrossover, MacdStrategy, RsiStrategy, Strategy,
};

/// One variant per strategy kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    MaCrossover {
        short_window: usize,
        long_window: usize,
    },
    Rsi {
        period: usize,
        overbought: f64,
        oversold: f64,
    },
    BollingerBands {
        period: usize,
        std_dev: f64,
        use_atr_exits: bool,
        atr_period: usize,
        atr_multiplier: f64,
    },
    Macd {
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
        histogram_threshold: f64,
    },
    Combined {
        strategies: Vec<StrategyConfig>,
        method: CombineMethod,
    },
}

impl StrategyConfig {
    /// Validate and construct the strategy this configuration describes.
    ///
    /// Fails fast with the first invalid parameter, before any data is
    /// processed; nested combined configurations are built depth-first.
    pub fn build(self) -> Result<Box<dyn Strategy>, ConfigError> {
        match self {
            StrategyConfig::MaCrossover {
                short_window,
                long_window,
            } => Ok(Box::new(MaCrossover::new(short_window, long_window)?)),
            StrategyConfig::Rsi {
                period,
                overbought,
                oversold,
            } => Ok(Box::new(RsiStrategy::new(period, overbought, oversold)?)),
            StrategyConfig::BollingerBands {
                period,
                std_dev,
                use_atr_exits,
                atr_period,
                atr_multiplier,
            } => Ok(Box::new(BollingerReversion::new(
                period,
                std_dev,
                use_atr_exits,
                atr_period,
                atr_multiplier,
            )?)),
            StrategyConfig::Macd {
                fast_period,
                slow_period,
                signal_period,
                histogram_threshold,
            } => Ok(Box::new(MacdStrategy::new(
                fast_period,
                slow_period,
                signal_period,
                histogram_threshold,
            )?)),
            StrategyConfig::Combined { strategies, method } => {
                let built = strategies
                    .into_iter()
                    .map(StrategyConfig::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Box::new(Combined::new(built, method)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_variant() {
        let configs = [
            StrategyConfig::MaCrossover {
                short_window: 20,
                long_window: 50,
            },
            StrategyConfig::Rsi {
                period: 14,
                overbought: 70.0,
                oversold: 30.0,
            },
            StrategyConfig::BollingerBands {
                period: 20,
                std_dev: 2.0,
                use_atr_exits: true,
                atr_period: 14,
                atr_multiplier: 2.0,
            },
            StrategyConfig::Macd {
                fast_period: 12,
                slow_period: 26,
                signal_period: 9,
                histogram_threshold: 0.0,
            },
        ];
        for config in configs {
            assert!(config.build().is_ok());
        }
    }

    #[test]
    fn invalid_nested_config_fails_fast() {
        let config = StrategyConfig::Combined {
            strategies: vec![
                StrategyConfig::MaCrossover {
                    short_window: 20,
                    long_window: 50,
                },
                StrategyConfig::Macd {
                    fast_period: 26,
                    slow_period: 12,
                    signal_period: 9,
                    histogram_threshold: 0.0,
                },
            ],
            method: CombineMethod::And,
        };
        assert_eq!(
            config.build().map(|_| ()),
            Err(ConfigError::FastNotBelowSlow { fast: 26, slow: 12 })
        );
    }

    #[test]
    fn too_few_substrategies_rejected() {
        let config = StrategyConfig::Combined {
            strategies: vec![StrategyConfig::Rsi {
                period: 14,
                overbought: 70.0,
                oversold: 30.0,
            }],
            method: CombineMethod::Or,
        };
        assert_eq!(
            config.build().map(|_| ()),
            Err(ConfigError::TooFewStrategies { count: 1 })
        );
    }

    #[test]
    fn json_roundtrip_with_tag() {
        let config = StrategyConfig::Combined {
            strategies: vec![
                StrategyConfig::MaCrossover {
                    short_window: 10,
                    long_window: 30,
                },
                StrategyConfig::Rsi {
                    period: 14,
                    overbought: 70.0,
                    oversold: 30.0,
                },
            ],
            method: CombineMethod::Or,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"combined\""));
        assert!(json.contains("\"method\":\"OR\""));
        let back: StrategyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn unknown_method_string_rejected_at_parse() {
        let json = r#"{
            "kind": "combined",
            "strategies": [
                {"kind": "ma_crossover", "short_window": 10, "long_window": 30},
                {"kind": "rsi", "period": 14, "overbought": 70.0, "oversold": 30.0}
            ],
            "method": "XOR"
        }"#;
        assert!(serde_json::from_str::<StrategyConfig>(json).is_err());
    }
}

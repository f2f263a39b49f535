//! Combined strategy — AND/OR merge of several sub-strategies.
//!
//! Each sub-strategy scans the full series independently; its signals are
//! keyed by timestamp and the union of timestamps is walked in order. Under
//! AND a merged signal fires only where every sub-strategy fired with the
//! same action; under OR the first sub-strategy's signal at the timestamp is
//! taken. Indicator texts from all sub-strategies that fired are joined with
//! `" | "`.
//!
//! The merged stream does NOT inherit the per-strategy alternation
//! invariant: two sub-strategies can each alternate while their OR-merge
//! emits consecutive BUYs. The backtester drops signals that do not apply
//! to its position state, so this is tolerated rather than repaired.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Bar, Signal};
use crate::error::ConfigError;

use super::Strategy;

/// How sub-strategy opinions are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CombineMethod {
    And,
    Or,
}

pub struct Combined {
    strategies: Vec<Box<dyn Strategy>>,
    method: CombineMethod,
}

impl Combined {
    /// At least two sub-strategies are required; they are owned exclusively
    /// by the combination (no sharing, no cycles).
    pub fn new(
        strategies: Vec<Box<dyn Strategy>>,
        method: CombineMethod,
    ) -> Result<Self, ConfigError> {
        if strategies.len() < 2 {
            return Err(ConfigError::TooFewStrategies {
                count: strategies.len(),
            });
        }
        Ok(Self { strategies, method })
    }
}

impl Strategy for Combined {
    fn name(&self) -> &str {
        "Combined Strategy"
    }

    fn generate_signals(&self, bars: &[Bar]) -> Vec<Signal> {
        // One timestamp-keyed map per sub-strategy, in sub-strategy order.
        let per_strategy: Vec<BTreeMap<DateTime<Utc>, Signal>> = self
            .strategies
            .iter()
            .map(|strategy| {
                strategy
                    .generate_signals(bars)
                    .into_iter()
                    .map(|signal| (signal.timestamp, signal))
                    .collect()
            })
            .collect();

        let all_timestamps: BTreeSet<DateTime<Utc>> = per_strategy
            .iter()
            .flat_map(|signals| signals.keys().copied())
            .collect();

        let mut combined = Vec::new();
        for timestamp in all_timestamps {
            let fired: Vec<&Signal> = per_strategy
                .iter()
                .filter_map(|signals| signals.get(&timestamp))
                .collect();
            if fired.is_empty() {
                continue;
            }

            let merged = match self.method {
                CombineMethod::And => {
                    if fired.len() != self.strategies.len() {
                        continue;
                    }
                    if !fired.iter().all(|s| s.action == fired[0].action) {
                        continue;
                    }
                    fired[0]
                }
                // Tie-break preserved from the source system: the first
                // sub-strategy present at this timestamp wins.
                CombineMethod::Or => fired[0],
            };

            let indicator = fired
                .iter()
                .map(|s| s.indicator.as_str())
                .collect::<Vec<_>>()
                .join(" | ");

            combined.push(Signal {
                indicator,
                ..merged.clone()
            });
        }

        combined
    }
}

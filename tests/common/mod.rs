//! Shared helpers for integration tests.
//!
//! Each test binary compiles its own copy, so some helpers go unused per
//! binary.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use siglab::domain::{Bar, Signal, SignalAction};
use siglab::strategies::Strategy;

/// Base timestamp for synthetic series.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
}

/// Synthetic daily bars from close prices: open = prev close, high/low
/// bracket open and close by 1.0, volume 1000.
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                timestamp: base_time() + Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert a signal list strictly alternates BUY/SELL starting with BUY.
pub fn assert_alternates(signals: &[Signal]) {
    for (i, signal) in signals.iter().enumerate() {
        let expected = if i % 2 == 0 {
            SignalAction::Buy
        } else {
            SignalAction::Sell
        };
        assert_eq!(
            signal.action, expected,
            "signal {i} breaks BUY/SELL alternation"
        );
    }
}

/// Test double emitting a fixed action at fixed bar indices.
pub struct FixedSignals {
    pub indices: Vec<(usize, SignalAction)>,
}

impl Strategy for FixedSignals {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn generate_signals(&self, bars: &[Bar]) -> Vec<Signal> {
        self.indices
            .iter()
            .map(|&(i, action)| Signal {
                timestamp: bars[i].timestamp,
                price: bars[i].close,
                action,
                indicator: format!("fixed@{i}"),
            })
            .collect()
    }
}

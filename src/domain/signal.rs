//! Signal — a discrete BUY/SELL event derived from indicator state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a trading signal. The engine is long-only: BUY opens,
/// SELL closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
}

/// One signal emitted by a strategy scan.
///
/// `timestamp` always matches a bar timestamp in the scanned series, and
/// `price` is that bar's close. `indicator` is free-form text recording the
/// numeric state that triggered the signal, for display alongside charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub action: SignalAction,
    pub indicator: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&SignalAction::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::to_string(&SignalAction::Sell).unwrap(),
            "\"SELL\""
        );
    }
}

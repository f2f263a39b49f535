//! Domain types — plain data records shared across the engine.
//!
//! Everything here is a passive record: bars in, signals/trades/snapshots out.
//! Consumers (visualization, reporting) receive these as serde-serializable
//! structs and the engine never takes them back.

pub mod bar;
pub mod portfolio;
pub mod position;
pub mod signal;
pub mod trade;

pub use bar::Bar;
pub use portfolio::PortfolioSnapshot;
pub use position::Position;
pub use signal::{Signal, SignalAction};
pub use trade::{Trade, TradeKind};

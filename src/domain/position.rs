//! Position — the backtester's internal holding state.

/// Either flat (all cash) or long some quantity bought at `entry_price`.
/// The engine never models short positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Flat,
    Long { entry_price: f64, size: f64 },
}

impl Position {
    pub fn is_flat(&self) -> bool {
        matches!(self, Position::Flat)
    }
}

//! Position — a single open exposure bounded by a stop and a target.

use super::asset::AssetId;

/// An open exposure to exactly one asset.
///
/// Entry price and size are fixed at open; only `stop_loss` moves afterwards,
/// and only upward (the trailing ratchet lives in the position manager).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub asset: AssetId,
    pub entry_price: f64,
    /// Notional size in balance units.
    pub size: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
}

impl Position {
    pub fn unrealized_pnl(&self, current_price: f64) -> f64 {
        (current_price - self.entry_price) * self.size
    }

    /// Fractional gain/loss relative to the entry price.
    pub fn unrealized_return(&self, current_price: f64) -> f64 {
        (current_price - self.entry_price) / self.entry_price
    }
}

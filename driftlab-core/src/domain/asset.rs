//! Asset — a tradable synthetic instrument and its slot identifier.

use super::price_buffer::PriceBuffer;
use super::symbol::Symbol;
use std::fmt;

/// Lower bound of the price band, as a fraction of base price.
pub const PRICE_BAND_LOW: f64 = 0.7;
/// Upper bound of the price band, as a fraction of base price.
pub const PRICE_BAND_HIGH: f64 = 1.5;

/// Slot index of an asset in the engine's table.
///
/// "No asset" is `Option<AssetId>` at every call site; there is no sentinel
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub usize);

impl AssetId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A synthetic instrument: identity, reference price, live price, a
/// short-lived directional bias, and its recent price history.
#[derive(Debug, Clone)]
pub struct Asset {
    pub symbol: Symbol,
    /// Immutable reference price; the live price is clamped to
    /// `[0.7, 1.5] × base_price` by the walk.
    pub base_price: f64,
    pub current_price: f64,
    /// Directional bias re-rolled occasionally by the price walk.
    pub trend: f64,
    pub history: PriceBuffer,
}

impl Asset {
    /// Registers an asset at its base price. The history ring starts with one
    /// stored point (the base price), matching the engine's warm-up counting.
    pub fn new(symbol: &str, base_price: f64) -> Self {
        let mut history = PriceBuffer::new();
        history.push(base_price);
        Self {
            symbol: Symbol::new(symbol),
            base_price,
            current_price: base_price,
            trend: 0.0,
            history,
        }
    }

    pub fn min_price(&self) -> f64 {
        self.base_price * PRICE_BAND_LOW
    }

    pub fn max_price(&self) -> f64 {
        self.base_price * PRICE_BAND_HIGH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_asset_starts_at_base_price() {
        let asset = Asset::new("XAU", 2650.0);
        assert_eq!(asset.current_price, 2650.0);
        assert_eq!(asset.base_price, 2650.0);
        assert_eq!(asset.trend, 0.0);
        assert_eq!(asset.history.len(), 1);
    }

    #[test]
    fn price_band_derived_from_base() {
        let asset = Asset::new("SP500", 100.0);
        assert_eq!(asset.min_price(), 70.0);
        assert_eq!(asset.max_price(), 150.0);
    }

    #[test]
    fn symbol_truncated_on_registration() {
        let asset = Asset::new("FARTCOIN", 0.85);
        assert_eq!(asset.symbol, "FARTCOI");
    }
}

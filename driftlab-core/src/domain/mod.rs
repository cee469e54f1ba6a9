//! Domain types for the simulation engine.

pub mod asset;
pub mod position;
pub mod price_buffer;
pub mod symbol;
pub mod trade;

pub use asset::{Asset, AssetId, PRICE_BAND_HIGH, PRICE_BAND_LOW};
pub use position::Position;
pub use price_buffer::{PriceBuffer, PRICE_HISTORY};
pub use symbol::{Symbol, SYMBOL_MAX_LEN};
pub use trade::{TradeKind, TradeLog, TradeRecord, MAX_TRADES};

//! Default asset universe.
//!
//! The stock basket a simulation runs over when the config does not supply
//! one: index levels, metals, large caps, a few retail favorites, and a tail
//! of meme coins so small accounts have something affordable to trade.

use crate::config::AssetSpec;

fn spec(symbol: &str, base_price: f64) -> AssetSpec {
    AssetSpec {
        symbol: symbol.to_string(),
        base_price,
    }
}

pub fn default_universe() -> Vec<AssetSpec> {
    vec![
        // Indices & metals
        spec("NAS100", 21_500.0),
        spec("SP500", 6_000.0),
        spec("US30", 43_800.0),
        spec("XAU", 2_650.0),
        spec("XAG", 31.0),
        // Large caps
        spec("AAPL", 243.0),
        spec("MSFT", 418.0),
        spec("GOOGL", 192.0),
        spec("AMZN", 220.0),
        spec("NVDA", 140.0),
        spec("META", 595.0),
        spec("TSLA", 380.0),
        spec("BRK", 465.0),
        spec("LLY", 785.0),
        spec("V", 305.0),
        spec("UNH", 520.0),
        spec("XOM", 115.0),
        spec("JPM", 245.0),
        spec("WMT", 95.0),
        spec("JNJ", 155.0),
        spec("MA", 535.0),
        spec("PG", 170.0),
        spec("AVGO", 230.0),
        spec("HD", 420.0),
        spec("CVX", 165.0),
        // Retail favorites
        spec("COIN", 265.0),
        spec("PLTR", 71.0),
        spec("HOOD", 38.0),
        // Meme coins
        spec("FARTCOIN", 0.85),
        spec("WIF", 1.92),
        spec("BONK", 0.000_02),
        spec("PEPE", 0.000_012),
        spec("DOGE", 0.31),
        spec("SHIB", 0.000_021),
    ]
}

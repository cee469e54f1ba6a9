//! Per-tick synthetic price movement.
//!
//! Each asset takes one multiplicative step per tick:
//! `price *= 1 + drift + trend + noise`, clamped to the asset's band. The
//! trend bias is re-rolled occasionally so runs develop short directional
//! regimes instead of pure noise.

use crate::domain::Asset;
use crate::rng::SimRng;

/// Constant upward bias per tick.
const DRIFT: f64 = 0.0001;
/// Percent chance per tick that an asset's trend bias is re-rolled.
const TREND_REROLL_PCT: u32 = 5;
/// Re-rolled trend lands in `(u - 0.45) * 0.008`, slightly upward-skewed.
const TREND_OFFSET: f64 = 0.45;
const TREND_SCALE: f64 = 0.008;
/// Symmetric per-tick noise band: `(u - 0.5) * 0.012`.
const NOISE_SCALE: f64 = 0.012;

/// Advances one asset by one tick.
///
/// Draw order is fixed: trend roll, optional trend value, noise. Every
/// asset consumes the same engine stream sequentially.
pub fn advance_price(asset: &mut Asset, rng: &mut SimRng) {
    if rng.roll(TREND_REROLL_PCT) {
        asset.trend = (rng.unit() - TREND_OFFSET) * TREND_SCALE;
    }

    let noise = (rng.unit() - 0.5) * NOISE_SCALE;
    let step = DRIFT + asset.trend + noise;

    let new_price = (asset.current_price * (1.0 + step))
        .clamp(asset.min_price(), asset.max_price());

    asset.current_price = new_price;
    asset.history.push(new_price);
}

//! Trade selection — scan the basket for the single strongest candidate.
//!
//! Filters first (cooldown, warm-up, affordability, dust), then keeps the
//! strictly highest momentum strength above a balance-tiered threshold. Scan
//! order is insertion order, so exact ties resolve to the earliest asset.

use crate::domain::{Asset, AssetId};
use crate::signal::{momentum_strength, MOMENTUM_PERIOD};

/// Balance above which the last-traded asset is skipped for one entry.
const COOLDOWN_BALANCE: f64 = 5.0;
/// An asset is unaffordable when one unit costs more than this fraction of
/// the candidate position size.
const MAX_PRICE_TO_SIZE: f64 = 0.5;
/// Minimum affordable unit count; below this the position would be dust.
const MIN_UNITS: f64 = 0.01;

/// Entry threshold, tightening as the balance grows.
fn entry_threshold(balance: f64) -> f64 {
    if balance < 2.0 {
        0.015
    } else if balance < 10.0 {
        0.018
    } else {
        0.022
    }
}

/// Selection-time sizing fraction used only for the affordability filters.
///
/// Not the same schedule as the open-time sizing in the position manager;
/// the two tables are independent (see DESIGN.md).
fn affordability_fraction(balance: f64) -> f64 {
    if balance < 2.0 {
        0.70
    } else if balance < 5.0 {
        0.50
    } else {
        0.30
    }
}

/// Picks the best asset to enter, or `None` when nothing qualifies.
///
/// `cooldown` is the most recently traded asset; it is skipped only while
/// the balance exceeds the cooldown threshold.
pub fn select_best(assets: &[Asset], balance: f64, cooldown: Option<AssetId>) -> Option<AssetId> {
    let mut best: Option<AssetId> = None;
    let mut best_strength = entry_threshold(balance);

    for (i, asset) in assets.iter().enumerate() {
        if balance > COOLDOWN_BALANCE && cooldown == Some(AssetId(i)) {
            continue;
        }
        if asset.history.len() < MOMENTUM_PERIOD {
            continue;
        }

        let position_size = balance * affordability_fraction(balance);
        if asset.current_price > position_size * MAX_PRICE_TO_SIZE {
            continue;
        }
        if position_size / asset.current_price < MIN_UNITS {
            continue;
        }

        let strength = momentum_strength(asset);
        if strength > best_strength {
            best_strength = strength;
            best = Some(AssetId(i));
        }
    }

    best
}

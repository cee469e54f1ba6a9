//! Simulation engine — per-tick orchestration over the asset basket.
//!
//! One tick: advance every asset's price, let the position manager act on
//! the open position (stop/target/trail), then, if flat and still alive,
//! scan for a new entry. All effects are mutations of engine state; the
//! tick loop is O(asset_count) with no heap allocation.

pub mod position_manager;
pub mod random_walk;

pub use position_manager::{PositionManager, BALANCE_FLOOR};
pub use random_walk::advance_price;

use crate::domain::{Asset, Position, TradeLog, TradeRecord};
use crate::rng::SimRng;
use crate::selector::select_best;

/// Maximum number of registered assets; registrations past this are ignored.
pub const MAX_ASSETS: usize = 64;

/// The simulation: assets, the single position, the trade log, balance, and
/// an owned RNG so a seed fully determines a run.
#[derive(Debug, Clone)]
pub struct Engine {
    assets: Vec<Asset>,
    pm: PositionManager,
    trades: TradeLog,
    balance: f64,
    tick: u64,
    rng: SimRng,
}

impl Engine {
    /// Fresh engine: flat, no trades, tick 0.
    pub fn new(initial_balance: f64, rng: SimRng) -> Self {
        Self {
            assets: Vec::with_capacity(MAX_ASSETS),
            pm: PositionManager::new(),
            trades: TradeLog::new(),
            balance: initial_balance,
            tick: 0,
            rng,
        }
    }

    pub fn with_seed(initial_balance: f64, seed: u64) -> Self {
        Self::new(initial_balance, SimRng::seed_from_u64(seed))
    }

    /// Registers an asset at its base price. Silent no-op at capacity.
    pub fn add_asset(&mut self, symbol: &str, base_price: f64) {
        if self.assets.len() >= MAX_ASSETS {
            return;
        }
        self.assets.push(Asset::new(symbol, base_price));
    }

    /// One simulation step.
    pub fn tick(&mut self) {
        for asset in &mut self.assets {
            advance_price(asset, &mut self.rng);
        }

        let open_asset = self.pm.position().map(|pos| pos.asset);
        if let Some(id) = open_asset {
            let asset = &self.assets[id.index()];
            let (price, symbol) = (asset.current_price, asset.symbol);
            self.pm.update(price, symbol, &mut self.balance, &mut self.trades);
        }

        // A close above may free the slot; re-entry can happen this tick.
        if self.pm.is_flat() && self.balance > BALANCE_FLOOR {
            if let Some(id) = select_best(&self.assets, self.balance, self.pm.last_traded()) {
                self.pm
                    .open(id, &self.assets[id.index()], self.balance, &mut self.trades);
            }
        }

        self.tick += 1;
    }

    // ── Read-only state for the driver layer ─────────────────────────

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    pub fn trades(&self) -> &[TradeRecord] {
        self.trades.records()
    }

    pub fn trade_log(&self) -> &TradeLog {
        &self.trades
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn position(&self) -> Option<&Position> {
        self.pm.position()
    }

    /// The engine stops entering trades once the balance sits at the floor.
    pub fn is_alive(&self) -> bool {
        self.balance > BALANCE_FLOOR
    }
}

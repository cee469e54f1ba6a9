//! DriftLab Core — deterministic single-position momentum simulation engine.
//!
//! This crate contains the heart of the simulator:
//! - Domain types (symbols, assets, the price history ring, positions, trades)
//! - Per-tick synthetic price walk with banded drift/trend/noise
//! - Momentum signal and balance-tiered trade selection
//! - FLAT/OPEN position lifecycle with a trailing-stop ratchet
//! - The engine tick loop tying it all together over an owned, seeded RNG
//!
//! Everything is fixed-capacity and allocation-free on the tick path; a seed
//! fully determines a run.

pub mod domain;
pub mod engine;
pub mod rng;
pub mod selector;
pub mod signal;

pub use domain::{Asset, AssetId, Position, Symbol, TradeKind, TradeLog, TradeRecord};
pub use engine::{Engine, PositionManager, BALANCE_FLOOR, MAX_ASSETS};
pub use rng::{SeedHierarchy, SimRng};

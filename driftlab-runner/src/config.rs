//! Serializable simulation configuration.
//!
//! A config captures everything needed to reproduce a run: starting balance,
//! seed, termination bounds, and the asset basket. Strategy parameters
//! (thresholds, sizing tiers, stop distances) are fixed engine policy
//! constants and have no config surface.

use crate::universe::default_universe;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use driftlab_core::{BALANCE_FLOOR, MAX_ASSETS};

/// One basket entry: a ticker and its reference price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetSpec {
    pub symbol: String,
    pub base_price: f64,
}

/// Run parameters for a single simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    /// Starting balance.
    #[serde(default = "default_initial_balance")]
    pub initial_balance: f64,

    /// Master RNG seed; a seed fully determines a run.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Tick ceiling; the run stops here even if neither balance bound hits.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// The run stops once the balance reaches this value.
    #[serde(default = "default_target_balance")]
    pub target_balance: f64,

    /// Asset basket. Empty means "use the default universe" after
    /// [`SimConfig::resolved`].
    #[serde(default, rename = "assets")]
    pub assets: Vec<AssetSpec>,
}

fn default_initial_balance() -> f64 {
    1.0
}

fn default_seed() -> u64 {
    42
}

fn default_max_ticks() -> u64 {
    100_000
}

fn default_target_balance() -> f64 {
    1_000.0
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
            seed: default_seed(),
            max_ticks: default_max_ticks(),
            target_balance: default_target_balance(),
            assets: default_universe(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("initial_balance must be positive, got {0}")]
    NonPositiveBalance(f64),

    #[error("max_ticks must be greater than zero")]
    ZeroTicks,

    #[error("target_balance ({target}) must exceed the balance floor ({floor})")]
    TargetBelowFloor { target: f64, floor: f64 },

    #[error("asset basket is empty")]
    EmptyBasket,

    #[error("basket holds {count} assets, engine capacity is {capacity}")]
    BasketTooLarge { count: usize, capacity: usize },

    #[error("asset {symbol} has non-positive base price {price}")]
    NonPositiveBasePrice { symbol: String, price: f64 },
}

impl SimConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Fills an empty basket with the default universe.
    pub fn resolved(mut self) -> Self {
        if self.assets.is_empty() {
            self.assets = default_universe();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_balance <= 0.0 {
            return Err(ConfigError::NonPositiveBalance(self.initial_balance));
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        if self.target_balance <= BALANCE_FLOOR {
            return Err(ConfigError::TargetBelowFloor {
                target: self.target_balance,
                floor: BALANCE_FLOOR,
            });
        }
        if self.assets.is_empty() {
            return Err(ConfigError::EmptyBasket);
        }
        if self.assets.len() > MAX_ASSETS {
            return Err(ConfigError::BasketTooLarge {
                count: self.assets.len(),
                capacity: MAX_ASSETS,
            });
        }
        for spec in &self.assets {
            if spec.base_price <= 0.0 {
                return Err(ConfigError::NonPositiveBasePrice {
                    symbol: spec.symbol.clone(),
                    price: spec.base_price,
                });
            }
        }
        Ok(())
    }

    /// Deterministic content hash of this configuration.
    ///
    /// Two identical configs share a run id regardless of where or when they
    /// run, which names artifact directories stably.
    pub fn run_id(&self) -> String {
        let json = serde_json::to_string(self).expect("SimConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

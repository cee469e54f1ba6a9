//! Deterministic randomness.
//!
//! Each engine owns one [`SimRng`] and consumes it sequentially, per asset
//! per tick, so a seed fully determines a run. [`SeedHierarchy`] expands a
//! master seed into per-(label, iteration) sub-seeds via BLAKE3; derivation
//! is hash-based, not order-dependent, so batch sweeps produce identical
//! results regardless of scheduling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable uniform stream with the two draw shapes the price walk uses.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: StdRng,
}

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// One uniform draw in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// True with the given integer percent chance. One draw.
    pub fn roll(&mut self, percent: u32) -> bool {
        self.inner.gen_range(0..100u32) < percent
    }
}

/// Deterministic sub-seed derivation from a master seed.
///
/// `sub_seed(label, 3)` yields the same value no matter how many other
/// sub-seeds were derived before it.
#[derive(Debug, Clone)]
pub struct SeedHierarchy {
    master_seed: u64,
}

impl SeedHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a sub-seed for a (label, iteration) pair.
    pub fn sub_seed(&self, label: &str, iteration: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(label.as_bytes());
        hasher.update(&iteration.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Create a seeded [`SimRng`] from a sub-seed.
    pub fn rng_for(&self, label: &str, iteration: u64) -> SimRng {
        SimRng::seed_from_u64(self.sub_seed(label, iteration))
    }
}

//! Multi-seed sweeps.
//!
//! Runs the same configuration under many derived seeds in parallel. Each
//! iteration's seed comes from the BLAKE3 hierarchy keyed by the config's
//! run id, so the outcome is identical regardless of thread count or
//! scheduling order.

use crate::config::SimConfig;
use crate::result::SimResult;
use crate::runner::{run_simulation, SilentProgress};
use driftlab_core::SeedHierarchy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    pub iterations: usize,
    pub mean_final_balance: f64,
    pub median_final_balance: f64,
    pub min_final_balance: f64,
    pub max_final_balance: f64,
    /// Fraction of runs that ended at the balance floor.
    pub bust_rate: f64,
    /// Fraction of runs that reached the target balance.
    pub target_rate: f64,
    pub mean_trades: f64,
}

/// All results from a sweep, in iteration order.
#[derive(Debug)]
pub struct SweepResults {
    results: Vec<SimResult>,
}

impl SweepResults {
    pub fn all(&self) -> &[SimResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn summary(&self) -> SweepSummary {
        let n = self.results.len();
        if n == 0 {
            return SweepSummary {
                iterations: 0,
                mean_final_balance: 0.0,
                median_final_balance: 0.0,
                min_final_balance: 0.0,
                max_final_balance: 0.0,
                bust_rate: 0.0,
                target_rate: 0.0,
                mean_trades: 0.0,
            };
        }

        let mut balances: Vec<f64> = self
            .results
            .iter()
            .map(|r| r.metrics.final_balance)
            .collect();
        balances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let median = if n % 2 == 1 {
            balances[n / 2]
        } else {
            (balances[n / 2 - 1] + balances[n / 2]) / 2.0
        };

        let busted = self.results.iter().filter(|r| r.metrics.busted).count();
        let reached = self
            .results
            .iter()
            .filter(|r| r.metrics.reached_target)
            .count();
        let trades: usize = self.results.iter().map(|r| r.metrics.trade_count).sum();

        SweepSummary {
            iterations: n,
            mean_final_balance: balances.iter().sum::<f64>() / n as f64,
            median_final_balance: median,
            min_final_balance: balances[0],
            max_final_balance: balances[n - 1],
            bust_rate: busted as f64 / n as f64,
            target_rate: reached as f64 / n as f64,
            mean_trades: trades as f64 / n as f64,
        }
    }
}

/// Runs `iterations` independent simulations of the same config.
///
/// The config's own seed acts as the master seed; iteration i runs under
/// `SeedHierarchy::sub_seed(run_id, i)`.
pub fn run_sweep(config: &SimConfig, iterations: u64) -> SweepResults {
    let hierarchy = SeedHierarchy::new(config.seed);
    let label = config.run_id();

    let results: Vec<SimResult> = (0..iterations)
        .into_par_iter()
        .map(|iteration| {
            let mut derived = config.clone();
            derived.seed = hierarchy.sub_seed(&label, iteration);
            run_simulation(&derived, &SilentProgress)
        })
        .collect();

    SweepResults { results }
}

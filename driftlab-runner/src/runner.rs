//! Single-run orchestration: build the engine, drive the tick loop, collect
//! the result.

use crate::config::SimConfig;
use crate::result::SimResult;
use driftlab_core::Engine;
use std::time::Instant;

/// How often the run reports progress, in ticks.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Progress sink for long runs.
pub trait Progress: Sync {
    fn on_progress(&self, tick: u64, balance: f64, trades: usize);
}

/// Prints progress lines to stdout.
pub struct StdoutProgress;

impl Progress for StdoutProgress {
    fn on_progress(&self, tick: u64, balance: f64, trades: usize) {
        println!("Tick {tick}: Balance ${balance:.2}, Trades: {trades}");
    }
}

/// Discards progress; used by sweeps and tests.
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn on_progress(&self, _tick: u64, _balance: f64, _trades: usize) {}
}

/// Runs one simulation to completion.
///
/// The loop stops when the engine busts to the balance floor, reaches the
/// target balance, or hits the tick ceiling. The config is expected to be
/// resolved and validated.
pub fn run_simulation(config: &SimConfig, progress: &dyn Progress) -> SimResult {
    let mut engine = Engine::with_seed(config.initial_balance, config.seed);
    for spec in &config.assets {
        engine.add_asset(&spec.symbol, spec.base_price);
    }

    let started = Instant::now();
    while engine.is_alive()
        && engine.balance() < config.target_balance
        && engine.tick_count() < config.max_ticks
    {
        engine.tick();
        if engine.tick_count() % PROGRESS_INTERVAL == 0 {
            progress.on_progress(engine.tick_count(), engine.balance(), engine.trade_count());
        }
    }
    let elapsed = started.elapsed().as_secs_f64();

    SimResult::collect(config, &engine, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssetSpec;
    use driftlab_core::BALANCE_FLOOR;

    fn small_config(seed: u64, max_ticks: u64) -> SimConfig {
        SimConfig {
            initial_balance: 1.0,
            seed,
            max_ticks,
            target_balance: 1_000.0,
            assets: vec![
                AssetSpec {
                    symbol: "DOGE".into(),
                    base_price: 0.31,
                },
                AssetSpec {
                    symbol: "PEPE".into(),
                    base_price: 0.12,
                },
            ],
        }
    }

    #[test]
    fn run_respects_the_tick_ceiling() {
        let config = small_config(5, 2_000);
        let result = run_simulation(&config, &SilentProgress);
        assert!(result.metrics.ticks <= 2_000);
        assert!(result.metrics.final_balance >= BALANCE_FLOOR);
    }

    #[test]
    fn identical_configs_identical_results() {
        let config = small_config(9, 20_000);
        let a = run_simulation(&config, &SilentProgress);
        let b = run_simulation(&config, &SilentProgress);
        assert_eq!(a.metrics.final_balance, b.metrics.final_balance);
        assert_eq!(a.metrics.trade_count, b.metrics.trade_count);
        assert_eq!(a.trades, b.trades);
    }

    #[test]
    fn default_universe_run_completes() {
        let mut config = SimConfig::default();
        config.max_ticks = 5_000;
        let config = config.resolved();
        config.validate().unwrap();

        let result = run_simulation(&config, &SilentProgress);
        assert!(result.metrics.ticks <= 5_000);
        assert_eq!(result.config, config);
    }
}

//! Run results and summary metrics.

use crate::config::SimConfig;
use driftlab_core::{Engine, TradeRecord};
use serde::{Deserialize, Serialize};

/// Summary statistics for one completed run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimMetrics {
    pub final_balance: f64,
    pub ticks: u64,
    pub trade_count: usize,
    pub wins: usize,
    pub losses: usize,
    /// Wins over closed trades; 0 when nothing closed.
    pub win_rate: f64,
    /// The run ended at the balance floor.
    pub busted: bool,
    /// The run ended at or above the target balance.
    pub reached_target: bool,
    pub elapsed_secs: f64,
    pub ticks_per_sec: f64,
}

/// Everything a completed run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimResult {
    pub run_id: String,
    pub config: SimConfig,
    pub metrics: SimMetrics,
    pub trades: Vec<TradeRecord>,
}

impl SimResult {
    /// Collects final engine state into a result.
    pub fn collect(config: &SimConfig, engine: &Engine, elapsed_secs: f64) -> Self {
        let wins = engine.trade_log().wins();
        let losses = engine.trade_log().losses();
        let closed = wins + losses;
        let win_rate = if closed > 0 {
            wins as f64 / closed as f64
        } else {
            0.0
        };
        let ticks = engine.tick_count();
        let ticks_per_sec = if elapsed_secs > 0.0 {
            ticks as f64 / elapsed_secs
        } else {
            0.0
        };

        Self {
            run_id: config.run_id(),
            config: config.clone(),
            metrics: SimMetrics {
                final_balance: engine.balance(),
                ticks,
                trade_count: engine.trade_count(),
                wins,
                losses,
                win_rate,
                busted: !engine.is_alive(),
                reached_target: engine.balance() >= config.target_balance,
                elapsed_secs,
                ticks_per_sec,
            },
            trades: engine.trades().to_vec(),
        }
    }
}

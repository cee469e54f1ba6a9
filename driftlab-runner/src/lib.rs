//! DriftLab Runner — simulation orchestration on top of `driftlab-core`.
//!
//! This crate provides:
//! - TOML run configuration with validation and a content-hash run id
//! - The default asset universe
//! - The single-run loop with termination bounds and progress reporting
//! - Parallel multi-seed sweeps with deterministic seed derivation
//! - Artifact export (manifest.json, trades.csv)

pub mod config;
pub mod export;
pub mod result;
pub mod runner;
pub mod sweep;
pub mod universe;

pub use config::{AssetSpec, ConfigError, SimConfig};
pub use export::{save_artifacts, RunManifest};
pub use result::{SimMetrics, SimResult};
pub use runner::{run_simulation, Progress, SilentProgress, StdoutProgress, PROGRESS_INTERVAL};
pub use sweep::{run_sweep, SweepResults, SweepSummary};
pub use universe::default_universe;

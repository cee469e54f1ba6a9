//! Artifact export for completed runs.
//!
//! Each run gets a directory named by its short run id containing
//! `manifest.json` (config + metrics + timestamp) and `trades.csv` (the
//! trade tape).

use crate::result::{SimMetrics, SimResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::SimConfig;

/// Characters of the run id used for the directory name.
const RUN_DIR_ID_LEN: usize = 12;

/// The manifest written beside the trade tape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub created_at: String,
    pub config: SimConfig,
    pub metrics: SimMetrics,
}

/// Writes all artifacts for a run; returns the run directory.
pub fn save_artifacts(result: &SimResult, output_dir: &Path) -> Result<PathBuf> {
    let short_id = &result.run_id[..RUN_DIR_ID_LEN.min(result.run_id.len())];
    let run_dir = output_dir.join(short_id);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create run directory {}", run_dir.display()))?;

    let manifest = RunManifest {
        run_id: result.run_id.clone(),
        created_at: chrono::Local::now().to_rfc3339(),
        config: result.config.clone(),
        metrics: result.metrics.clone(),
    };
    let manifest_path = run_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(&manifest).context("failed to serialize manifest")?;
    std::fs::write(&manifest_path, json)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    let trades_path = run_dir.join("trades.csv");
    write_trades_csv(&trades_path, result)?;

    Ok(run_dir)
}

fn write_trades_csv(path: &Path, result: &SimResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create trades CSV {}", path.display()))?;
    for trade in &result.trades {
        writer
            .serialize(trade)
            .context("failed to serialize trade record")?;
    }
    writer.flush().context("failed to flush trades CSV")?;
    Ok(())
}

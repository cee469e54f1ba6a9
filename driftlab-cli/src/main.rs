//! DriftLab CLI — run simulations and seed sweeps from the terminal.
//!
//! Commands:
//! - `run` — execute one simulation (TOML config or the default universe),
//!   print the summary, save artifacts
//! - `sweep` — run the same config under many derived seeds in parallel and
//!   print aggregate statistics

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use driftlab_core::domain::TradeKind;
use driftlab_runner::{
    run_simulation, run_sweep, save_artifacts, SilentProgress, SimConfig, SimResult,
    StdoutProgress, SweepSummary,
};

#[derive(Parser)]
#[command(name = "driftlab", about = "DriftLab — synthetic momentum trading simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute one simulation and save artifacts.
    Run {
        /// Path to a TOML config file. Defaults to the built-in universe.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the config's RNG seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Override the config's tick ceiling.
        #[arg(long)]
        ticks: Option<u64>,

        /// Output directory for run artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Suppress per-10k-tick progress lines.
        #[arg(long, default_value_t = false)]
        quiet: bool,
    },
    /// Run a multi-seed sweep in parallel and print aggregate statistics.
    Sweep {
        /// Path to a TOML config file. Defaults to the built-in universe.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of derived-seed iterations.
        #[arg(long, default_value_t = 32)]
        iterations: u64,

        /// Override the config's master seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Override the config's tick ceiling.
        #[arg(long)]
        ticks: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            seed,
            ticks,
            output_dir,
            quiet,
        } => run_cmd(config, seed, ticks, output_dir, quiet),
        Commands::Sweep {
            config,
            iterations,
            seed,
            ticks,
        } => sweep_cmd(config, iterations, seed, ticks),
    }
}

fn load_config(path: Option<PathBuf>, seed: Option<u64>, ticks: Option<u64>) -> Result<SimConfig> {
    let mut config = match path {
        Some(path) => SimConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SimConfig::default(),
    };

    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(ticks) = ticks {
        config.max_ticks = ticks;
    }

    let config = config.resolved();
    config.validate().context("invalid simulation config")?;
    Ok(config)
}

fn run_cmd(
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    ticks: Option<u64>,
    output_dir: PathBuf,
    quiet: bool,
) -> Result<()> {
    let config = load_config(config_path, seed, ticks)?;

    println!("Assets loaded: {}", config.assets.len());
    println!("Starting balance: ${:.2}", config.initial_balance);
    println!("Target: ${:.2}", config.target_balance);
    println!();

    let result = if quiet {
        run_simulation(&config, &SilentProgress)
    } else {
        run_simulation(&config, &StdoutProgress)
    };

    print_summary(&result);

    let run_dir = save_artifacts(&result, &output_dir)?;
    println!("Artifacts saved to: {}", run_dir.display());

    Ok(())
}

fn sweep_cmd(
    config_path: Option<PathBuf>,
    iterations: u64,
    seed: Option<u64>,
    ticks: Option<u64>,
) -> Result<()> {
    let config = load_config(config_path, seed, ticks)?;

    println!(
        "Sweeping {iterations} seeds over {} assets (master seed {})...",
        config.assets.len(),
        config.seed
    );

    let results = run_sweep(&config, iterations);
    print_sweep_summary(&results.summary());

    Ok(())
}

fn print_summary(result: &SimResult) {
    let m = &result.metrics;

    println!();
    println!("============================================");
    println!("Simulation Complete");
    println!("============================================");
    println!("Final balance:  ${:.2}", m.final_balance);
    println!("Total ticks:    {}", m.ticks);
    println!("Total trades:   {}", m.trade_count);
    println!("Execution time: {:.3} seconds", m.elapsed_secs);
    println!("Ticks per sec:  {:.0}", m.ticks_per_sec);

    if m.wins + m.losses > 0 {
        println!(
            "Win rate:       {:.1}% ({} wins, {} losses)",
            m.win_rate * 100.0,
            m.wins,
            m.losses
        );
    }
    if m.reached_target {
        println!("Target reached.");
    }
    if m.busted {
        println!("Run ended at the balance floor.");
    }

    println!();
    println!("Last 10 trades:");
    let start = result.trades.len().saturating_sub(10);
    for trade in &result.trades[start..] {
        if trade.kind == TradeKind::Entry {
            println!("  {} {}", trade.kind, trade.symbol);
        } else {
            println!("  {} {} P&L: ${:.2}", trade.kind, trade.symbol, trade.pnl);
        }
    }
}

fn print_sweep_summary(summary: &SweepSummary) {
    println!();
    println!("=== Sweep Summary ===");
    println!("Iterations:     {}", summary.iterations);
    println!("Mean balance:   ${:.2}", summary.mean_final_balance);
    println!("Median balance: ${:.2}", summary.median_final_balance);
    println!(
        "Range:          ${:.2} to ${:.2}",
        summary.min_final_balance, summary.max_final_balance
    );
    println!("Bust rate:      {:.1}%", summary.bust_rate * 100.0);
    println!("Target rate:    {:.1}%", summary.target_rate * 100.0);
    println!("Mean trades:    {:.1}", summary.mean_trades);
}

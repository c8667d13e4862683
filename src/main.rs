//! Hive Swarm - headless runner
//!
//! Builds the ecosystem from a config file (or defaults), runs it for a fixed
//! number of ticks, and prints a summary. The full output can be written as JSON.

use std::path::PathBuf;

use clap::Parser;

use hive_swarm::core::config::SimulationConfig;
use hive_swarm::core::error::Result;
use hive_swarm::ecosystem::simulate;

/// Headless bee colony simulation
#[derive(Parser, Debug)]
#[command(name = "hive_swarm")]
#[command(about = "Run the bee colony simulation without a window")]
struct Args {
    /// TOML config file; defaults are used for anything it omits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Height-map seed file for the terrain
    #[arg(long)]
    height_map: Option<PathBuf>,

    /// Write the full JSON output here
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log per-tick detail
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "hive_swarm=debug"
    } else {
        "hive_swarm=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(path) = args.height_map {
        config.terrain.seed_map = Some(path);
    }

    tracing::info!(
        "Hive Swarm starting: seed {}, {} ticks, {} bees",
        config.seed,
        config.ticks,
        config.colony.initial_bees
    );

    let output = simulate(config)?;
    println!("{}", output.summary());

    if let Some(path) = args.output {
        std::fs::write(&path, output.to_json())?;
        println!("Full output written to {}", path.display());
    }

    Ok(())
}

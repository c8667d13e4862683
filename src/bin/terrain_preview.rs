//! Terrain preview
//!
//! Generates one height field and prints its statistics plus a coarse ASCII
//! relief map, or the raw samples as JSON.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use hive_swarm::core::config::TerrainConfig;
use hive_swarm::core::error::Result;
use hive_swarm::terrain::{build_terrain, HeightField};

/// Relief characters from lowest to highest
const RAMP: &[u8] = b" .:-=+*#%@";

#[derive(Parser, Debug)]
#[command(name = "terrain_preview")]
#[command(about = "Generate a diamond-square height field and inspect it")]
struct Args {
    /// Fractal detail n (grid side 2^n + 1)
    #[arg(long, default_value_t = 6)]
    detail: u32,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Height-map seed file
    #[arg(long)]
    height_map: Option<PathBuf>,

    /// Print samples as JSON instead of the ASCII map
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TerrainDump<'a> {
    size: usize,
    displacement: f32,
    min_height: f32,
    max_height: f32,
    mean_height: f32,
    samples: &'a [f32],
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hive_swarm=info")),
        )
        .init();

    let config = TerrainConfig {
        detail: args.detail,
        seed_map: args.height_map,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let field = build_terrain(&config, &mut rng)?;

    if args.json {
        let dump = TerrainDump {
            size: field.size(),
            displacement: field.displacement(),
            min_height: field.min_height(),
            max_height: field.max_height(),
            mean_height: field.mean_height(),
            samples: field.samples(),
        };
        println!("{}", serde_json::to_string(&dump)?);
        return Ok(());
    }

    println!(
        "{}x{} terrain, displacement {:.3}",
        field.size(),
        field.size(),
        field.displacement()
    );
    println!(
        "Heights: min {:.3}, max {:.3}, mean {:.3}",
        field.min_height(),
        field.max_height(),
        field.mean_height()
    );
    println!();
    print_relief(&field, 64);

    Ok(())
}

/// Downsample to at most `width` columns and shade by height
fn print_relief(field: &HeightField, width: usize) {
    let stride = (field.size() + width - 1) / width;
    let (lo, hi) = (field.min_height(), field.max_height());
    let span = (hi - lo).max(f32::EPSILON);

    for ix in (0..field.size()).step_by(stride.max(1)) {
        let line: String = (0..field.size())
            .step_by(stride.max(1))
            .map(|iz| {
                let h = field.sample(ix, iz).unwrap_or(lo);
                let level = ((h - lo) / span * (RAMP.len() - 1) as f32).round() as usize;
                RAMP[level.min(RAMP.len() - 1)] as char
            })
            .collect();
        println!("{}", line);
    }
}

//! Procedural terrain: the diamond-square generator and the height field it produces

pub mod generator;
pub mod height_field;
pub mod seed_map;

pub use generator::TerrainGenerator;
pub use height_field::HeightField;
pub use seed_map::SeedMap;

use rand::Rng;

use crate::core::config::TerrainConfig;
use crate::core::error::Result;

/// Build the world terrain from config, reading the seed map if one is configured
pub fn build_terrain<R: Rng>(config: &TerrainConfig, rng: &mut R) -> Result<HeightField> {
    let seed = match &config.seed_map {
        Some(path) => SeedMap::load(path)?,
        None => None,
    };

    let generator = TerrainGenerator::from_detail(config.detail)?;
    Ok(generator.generate(seed.as_ref(), rng))
}

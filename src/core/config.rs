//! Simulation configuration with documented defaults
//!
//! Every tunable lives here. Defaults describe the standard hive: a 257x257
//! terrain, 25 starting bees growing to 200, and 50 flowers turning over every
//! ten simulated seconds. Any section may be omitted from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::swarm::constants::BehaviorParams;

/// Largest accepted terrain detail (grid side 2^12 + 1)
pub const MAX_TERRAIN_DETAIL: u32 = 12;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the simulation RNG (terrain, noise, flowers)
    pub seed: u64,
    /// Ticks to run in headless mode
    pub ticks: u64,
    /// Fixed logical step per tick, in simulated seconds
    pub delta_time: f32,
    pub terrain: TerrainConfig,
    pub behavior: BehaviorParams,
    pub colony: ColonyConfig,
    pub flowers: FlowerConfig,
}

/// Terrain generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Fractal detail n: grid side is 2^n + 1 and displacement is 1.25^n
    pub detail: u32,
    /// Lower vertical bound of the world box
    pub min_height: f32,
    /// Optional height-map seed file; absence falls back to random corners
    pub seed_map: Option<PathBuf>,
}

/// Hive and population growth parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    pub initial_bees: usize,
    /// Population never grows past this
    pub max_bees: usize,
    /// Spawn interval at zero pollen; shrinks as base / sqrt(pollen + 1)
    pub spawn_base_interval: f32,
    /// Pollen stops being collected once the hive holds this much
    pub pollen_cap: u32,
    /// Hive sits this far above the terrain at the origin
    pub hive_height_offset: f32,
    pub hive_base_size: f32,
    /// Hive scale added per unit of stored pollen
    pub hive_growth_per_pollen: f32,
}

/// Flower field parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerConfig {
    pub initial_count: usize,
    /// Seconds between withering the oldest flower and blooming a new one
    pub turnover_interval: f32,
    /// Flowers are never placed closer than this to the origin
    pub min_origin_distance: f32,
    /// Flowers float this far above the terrain
    pub height_offset: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks: 3000,
            delta_time: 0.1,
            terrain: TerrainConfig::default(),
            behavior: BehaviorParams::default(),
            colony: ColonyConfig::default(),
            flowers: FlowerConfig::default(),
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            detail: 8,
            min_height: 0.0,
            seed_map: None,
        }
    }
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            initial_bees: 25,
            max_bees: 200,
            spawn_base_interval: 60.0,
            pollen_cap: 500,
            hive_height_offset: 2.0,
            hive_base_size: 2.5,
            hive_growth_per_pollen: 0.01,
        }
    }
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            initial_count: 50,
            turnover_interval: 10.0,
            min_origin_distance: 10.0,
            height_offset: 0.5,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.delta_time > 0.0 && self.delta_time.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "delta_time must be positive, got {}",
                self.delta_time
            )));
        }

        if self.terrain.detail == 0 || self.terrain.detail > MAX_TERRAIN_DETAIL {
            return Err(SimError::InvalidConfig(format!(
                "terrain.detail must be in 1..={}, got {}",
                MAX_TERRAIN_DETAIL, self.terrain.detail
            )));
        }

        if self.colony.max_bees < self.colony.initial_bees {
            return Err(SimError::InvalidConfig(format!(
                "colony.max_bees ({}) is below colony.initial_bees ({})",
                self.colony.max_bees, self.colony.initial_bees
            )));
        }

        if self.colony.spawn_base_interval <= 0.0 || self.flowers.turnover_interval <= 0.0 {
            return Err(SimError::InvalidConfig(
                "spawn and turnover intervals must be positive".into(),
            ));
        }

        if self.flowers.min_origin_distance < 0.0 {
            return Err(SimError::InvalidConfig(
                "flowers.min_origin_distance must be non-negative".into(),
            ));
        }

        self.behavior.validate()
    }

    /// Terrain side length, 2^n + 1
    pub fn grid_size(&self) -> usize {
        (1usize << self.terrain.detail) + 1
    }
}

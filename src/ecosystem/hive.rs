//! The hive: home base every bee returns to

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::config::ColonyConfig;
use crate::terrain::HeightField;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hive {
    position: Vec3,
    facing: Vec3,
    size: f32,
    base_size: f32,
    growth_per_pollen: f32,
}

impl Hive {
    /// Place the hive above the terrain at the origin
    pub fn new(terrain: &HeightField, config: &ColonyConfig) -> Self {
        let position = Vec3::new(0.0, terrain.height_at(0.0, 0.0) + config.hive_height_offset, 0.0);
        tracing::debug!("Hive placed at {:?}", position);
        Self {
            position,
            facing: Vec3::Z,
            size: config.hive_base_size,
            base_size: config.hive_base_size,
            growth_per_pollen: config.hive_growth_per_pollen,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Grow with the stored pollen
    pub fn resize(&mut self, pollen: u32) {
        self.size = self.base_size + self.growth_per_pollen * pollen as f32;
    }
}

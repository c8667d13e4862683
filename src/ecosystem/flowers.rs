//! Flower field - the foraging targets
//!
//! Flowers live in planting order so the oldest can be withered first.

use std::collections::VecDeque;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::FlowerConfig;
use crate::core::types::{BoundBox, Tick};
use crate::terrain::HeightField;

/// Give up re-drawing a placement after this many tries
const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub position: Vec3,
    pub planted_at: Tick,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowerField {
    flowers: VecDeque<Flower>,
}

impl FlowerField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Flower> + '_ {
        self.flowers.iter()
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.flowers.iter().map(|f| f.position).collect()
    }

    pub fn plant(&mut self, position: Vec3, tick: Tick) {
        self.flowers.push_back(Flower {
            position,
            planted_at: tick,
        });
    }

    /// Plant one flower at a random spot on the terrain
    ///
    /// Candidates are drawn one unit inside the bounds and re-drawn while they
    /// lie closer than `min_origin_distance` to the origin, measured before the
    /// flower is dropped onto the terrain.
    pub fn spawn_random<R: Rng>(
        &mut self,
        terrain: &HeightField,
        bounds: &BoundBox,
        config: &FlowerConfig,
        tick: Tick,
        rng: &mut R,
    ) -> Vec3 {
        let lo = bounds.min + Vec3::ONE;
        let hi = bounds.max - Vec3::ONE;

        let mut candidate = random_between(rng, lo, hi);
        let mut attempts = 1;
        while candidate.length() < config.min_origin_distance && attempts < MAX_PLACEMENT_ATTEMPTS {
            candidate = random_between(rng, lo, hi);
            attempts += 1;
        }
        if candidate.length() < config.min_origin_distance {
            tracing::warn!(
                "No flower spot at least {} from the hive after {} tries",
                config.min_origin_distance,
                attempts
            );
        }

        candidate.y = terrain.height_at(candidate.x, candidate.z) + config.height_offset;
        self.plant(candidate, tick);
        candidate
    }

    /// Remove and return the oldest flower
    pub fn wither_oldest(&mut self) -> Option<Flower> {
        self.flowers.pop_front()
    }
}

fn random_between<R: Rng>(rng: &mut R, lo: Vec3, hi: Vec3) -> Vec3 {
    Vec3::new(
        uniform(rng, lo.x, hi.x),
        uniform(rng, lo.y, hi.y),
        uniform(rng, lo.z, hi.z),
    )
}

// Degenerate ranges collapse to their midpoint
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        (lo + hi) / 2.0
    }
}

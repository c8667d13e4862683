//! Color definitions for bees, flowers and the hive

use serde::{Deserialize, Serialize};

use crate::swarm::agent::BeeMode;

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Sky color behind the scene
pub const BACKGROUND: Color = Color::new(0.53, 0.81, 0.92, 1.0);

pub const BEE_FORAGING: Color = Color::new(1.0, 0.843, 0.0, 1.0); // Gold
pub const BEE_RETURNING: Color = Color::new(1.0, 0.5, 0.0, 1.0); // Orange
pub const FLOWER: Color = Color::new(1.0, 0.4118, 0.7059, 1.0); // Hot pink
pub const HIVE: Color = Color::new(1.0, 0.627, 0.196, 1.0);

/// Bees turn orange while carrying pollen
pub fn bee_color(mode: BeeMode) -> Color {
    match mode {
        BeeMode::Foraging => BEE_FORAGING,
        BeeMode::Returning => BEE_RETURNING,
    }
}

//! Bee behavior constants - the force model's tuning in one place
//!
//! Radii are world units, strengths are acceleration units. Changing any of
//! these changes the swarm's character, so defaults must stay as they are.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

// Separation
pub const OBSTACLE_RADIUS: f32 = 0.5;
pub const AVOIDANCE_STRENGTH: f32 = 2.5;

// Kinematics
pub const MAX_SPEED: f32 = 5.0;
pub const NOISE_SCALE: f32 = 2.0;

// Cohesion / alignment
pub const SWARM_RADIUS: f32 = 15.0;
pub const SWARM_STRENGTH: f32 = 0.85;

// Foraging
pub const OBJECT_SENSE_RADIUS: f32 = 10.0;
pub const INTERACTION_RADIUS: f32 = 2.0;

// Containment
pub const BOUNDARY_RADIUS: f32 = 5.0;
pub const CONTAINMENT_STRENGTH: f32 = 10.0;

/// Goal-seeking pull is a fraction of the containment strength
pub const SEEK_FACTOR: f32 = 0.75;

/// Vectors shorter than this are treated as having no direction
pub const DEGENERATE_LENGTH: f32 = 1e-4;

/// Runtime copy of the constants so configs can override them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorParams {
    pub obstacle_radius: f32,
    pub avoidance_strength: f32,
    pub max_speed: f32,
    pub noise_scale: f32,
    pub swarm_radius: f32,
    pub swarm_strength: f32,
    pub object_sense_radius: f32,
    pub interaction_radius: f32,
    pub boundary_radius: f32,
    pub containment_strength: f32,
}

impl Default for BehaviorParams {
    fn default() -> Self {
        Self {
            obstacle_radius: OBSTACLE_RADIUS,
            avoidance_strength: AVOIDANCE_STRENGTH,
            max_speed: MAX_SPEED,
            noise_scale: NOISE_SCALE,
            swarm_radius: SWARM_RADIUS,
            swarm_strength: SWARM_STRENGTH,
            object_sense_radius: OBJECT_SENSE_RADIUS,
            interaction_radius: INTERACTION_RADIUS,
            boundary_radius: BOUNDARY_RADIUS,
            containment_strength: CONTAINMENT_STRENGTH,
        }
    }
}

impl BehaviorParams {
    /// Magnitude of the pull toward a flower or toward home
    pub fn seek_strength(&self) -> f32 {
        self.containment_strength * SEEK_FACTOR
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            ("obstacle_radius", self.obstacle_radius),
            ("avoidance_strength", self.avoidance_strength),
            ("max_speed", self.max_speed),
            ("noise_scale", self.noise_scale),
            ("swarm_radius", self.swarm_radius),
            ("swarm_strength", self.swarm_strength),
            ("object_sense_radius", self.object_sense_radius),
            ("interaction_radius", self.interaction_radius),
            ("boundary_radius", self.boundary_radius),
            ("containment_strength", self.containment_strength),
        ];

        for (name, value) in values {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(SimError::InvalidConfig(format!(
                    "behavior.{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        if self.max_speed == 0.0 {
            return Err(SimError::InvalidConfig("behavior.max_speed must be positive".into()));
        }

        Ok(())
    }
}

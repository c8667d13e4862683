//! A single bee: force accumulation, integration, and the forage/return cycle

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{AgentId, BoundBox};
use crate::swarm::constants::{BehaviorParams, DEGENERATE_LENGTH};
use crate::swarm::forces;
use crate::swarm::snapshot::SwarmSnapshot;
use crate::terrain::HeightField;

/// Behavioral state. There is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeeMode {
    /// Looking for flowers
    #[default]
    Foraging,
    /// Carrying pollen back to the hive
    Returning,
}

/// What changed in an update that switched modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeTransition {
    /// Foraging -> Returning, a flower was reached
    PickedUp,
    /// Returning -> Foraging, pollen dropped at home
    Delivered,
}

impl ModeTransition {
    /// Mode the bee is in after the transition
    pub fn mode_after(&self) -> BeeMode {
        match self {
            ModeTransition::PickedUp => BeeMode::Returning,
            ModeTransition::Delivered => BeeMode::Foraging,
        }
    }
}

/// Read-only inputs shared by every bee in one tick
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    pub delta_time: f32,
    pub obstacles: &'a [Vec3],
    pub targets: &'a [Vec3],
    pub bounds: &'a BoundBox,
    pub swarm: &'a SwarmSnapshot,
    pub terrain: &'a HeightField,
    pub params: &'a BehaviorParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    facing: Vec3,
    home: Vec3,
    mode: BeeMode,
    /// Set on arrival at home, cleared when the owner collects the pollen
    resource_ready: bool,
    total_delivered: u32,
}

impl Agent {
    /// A foraging bee at `home`, heading +X
    pub fn new(id: AgentId, home: Vec3) -> Self {
        Self {
            id,
            position: home,
            velocity: Vec3::X,
            acceleration: Vec3::ZERO,
            facing: Vec3::X,
            home,
            mode: BeeMode::Foraging,
            resource_ready: false,
            total_delivered: 0,
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    pub fn home(&self) -> Vec3 {
        self.home
    }

    pub fn mode(&self) -> BeeMode {
        self.mode
    }

    pub fn resource_ready(&self) -> bool {
        self.resource_ready
    }

    pub fn total_delivered(&self) -> u32 {
        self.total_delivered
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Point the bee along `direction`; near-zero vectors are rejected
    pub fn set_facing(&mut self, direction: Vec3) -> bool {
        if direction.length() > DEGENERATE_LENGTH {
            self.facing = direction.normalize();
            true
        } else {
            false
        }
    }

    /// Hand over the delivered pollen and clear the ready flag
    pub fn take_delivered(&mut self) -> u32 {
        let delivered = self.total_delivered;
        self.total_delivered = 0;
        self.resource_ready = false;
        delivered
    }

    /// Advance one tick
    ///
    /// Only this bee's own fields are written. Returns the mode switch, if any.
    pub fn update<R: Rng>(
        &mut self,
        ctx: &UpdateContext<'_>,
        rng: &mut R,
    ) -> Option<ModeTransition> {
        let params = ctx.params;
        let bias = forces::swarm_bias(self.position, ctx.swarm, params);

        self.acceleration = Vec3::ZERO;

        let transition = match self.mode {
            BeeMode::Returning => {
                self.acceleration += forces::seek(self.position, self.home, params.seek_strength());
                if self.position.distance(self.home) < params.interaction_radius {
                    self.mode = BeeMode::Foraging;
                    self.resource_ready = true;
                    self.total_delivered += 1;
                    Some(ModeTransition::Delivered)
                } else {
                    None
                }
            }
            BeeMode::Foraging => {
                let outcome = forces::forage_force(self.position, ctx.targets, params);
                self.acceleration += outcome.force;
                if outcome.reached {
                    self.mode = BeeMode::Returning;
                    Some(ModeTransition::PickedUp)
                } else {
                    None
                }
            }
        };

        self.acceleration += forces::avoidance_force(self.position, ctx.obstacles, params);

        let ground = ctx.terrain.height_at(self.position.x, self.position.z);
        self.acceleration +=
            forces::containment_force(self.position, self.home, ctx.bounds, ground, params);

        self.acceleration += bias.position;

        let noise = forces::random_unit_cube(rng) * params.noise_scale;
        self.velocity += self.acceleration * ctx.delta_time + bias.direction + noise;
        self.velocity = forces::clamp_speed(self.velocity, params.max_speed);

        let step = self.velocity * ctx.delta_time;
        self.position += step;
        if self.position.y < ctx.terrain.height_at(self.position.x, self.position.z) {
            self.position -= step * 2.0;
            self.velocity.y = -self.velocity.y;
        }

        self.set_facing(self.velocity);

        if let Some(t) = transition {
            tracing::debug!("Bee {} {:?} -> {:?}", self.id.0, t, self.mode);
        }

        transition
    }
}

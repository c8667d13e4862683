//! Pre-tick view of the swarm
//!
//! Captured once before any bee moves, so every bee in a tick reacts to the
//! same world regardless of update order.

use glam::Vec3;

use crate::swarm::agent::Agent;

/// Parallel position and facing lists, index-aligned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwarmSnapshot {
    positions: Vec<Vec3>,
    directions: Vec<Vec3>,
}

impl SwarmSnapshot {
    /// Build from explicit lists; members beyond the shorter list are ignored
    pub fn new(positions: Vec<Vec3>, directions: Vec<Vec3>) -> Self {
        let len = positions.len().min(directions.len());
        let mut positions = positions;
        let mut directions = directions;
        positions.truncate(len);
        directions.truncate(len);
        Self {
            positions,
            directions,
        }
    }

    pub fn capture(agents: &[Agent]) -> Self {
        Self {
            positions: agents.iter().map(|a| a.position()).collect(),
            directions: agents.iter().map(|a| a.facing()).collect(),
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn directions(&self) -> &[Vec3] {
        &self.directions
    }

    /// (position, facing) pairs
    pub fn members(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.positions.iter().copied().zip(self.directions.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

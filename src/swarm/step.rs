//! One swarm tick: snapshot, then update every bee against it

use glam::Vec3;
use rand::Rng;

use crate::core::types::{AgentId, BoundBox};
use crate::swarm::agent::{Agent, ModeTransition, UpdateContext};
use crate::swarm::constants::BehaviorParams;
use crate::swarm::snapshot::SwarmSnapshot;
use crate::terrain::HeightField;

/// Fixed inputs for stepping a swarm over one terrain
#[derive(Debug, Clone, Copy)]
pub struct SwarmStep<'a> {
    pub terrain: &'a HeightField,
    pub bounds: BoundBox,
    pub params: &'a BehaviorParams,
    pub delta_time: f32,
}

impl<'a> SwarmStep<'a> {
    pub fn new(
        terrain: &'a HeightField,
        bounds: BoundBox,
        params: &'a BehaviorParams,
        delta_time: f32,
    ) -> Self {
        Self {
            terrain,
            bounds,
            params,
            delta_time,
        }
    }

    /// Update every bee once
    ///
    /// The pre-tick snapshot doubles as the obstacle set, so bees repel each
    /// other at short range while the swarm bias pulls them together.
    pub fn run<R: Rng>(
        &self,
        agents: &mut [Agent],
        targets: &[Vec3],
        rng: &mut R,
    ) -> Vec<(AgentId, ModeTransition)> {
        let snapshot = SwarmSnapshot::capture(agents);
        let ctx = UpdateContext {
            delta_time: self.delta_time,
            obstacles: snapshot.positions(),
            targets,
            bounds: &self.bounds,
            swarm: &snapshot,
            terrain: self.terrain,
            params: self.params,
        };

        let mut transitions = Vec::new();
        for agent in agents.iter_mut() {
            if let Some(t) = agent.update(&ctx, rng) {
                transitions.push((agent.id(), t));
            }
        }

        tracing::debug!(
            "Swarm step: {} bees, {} targets, {} transitions",
            agents.len(),
            targets.len(),
            transitions.len()
        );

        transitions
    }
}

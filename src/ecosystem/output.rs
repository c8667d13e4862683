//! Simulation output and serialization

use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::types::Tick;
use crate::ecosystem::events::{EventLog, SimulationEvent};
use crate::ecosystem::flowers::Flower;
use crate::ecosystem::hive::Hive;
use crate::ecosystem::simulation::Ecosystem;
use crate::swarm::agent::{Agent, BeeMode};

/// Complete simulation output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub final_state: EcosystemSnapshot,
    pub history: EventLog,
    pub statistics: SimulationStats,
}

/// Serializable snapshot of the world at the end of a run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EcosystemSnapshot {
    pub tick: Tick,
    pub clock: f64,
    pub hive: Hive,
    pub bees: Vec<Agent>,
    pub flowers: Vec<Flower>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationStats {
    pub ticks_simulated: Tick,
    pub simulated_seconds: f64,
    pub simulation_time_ms: u64,
    pub bees_at_start: usize,
    pub bees_at_end: usize,
    pub bees_born: usize,
    pub returning_at_end: usize,
    pub flowers_turned_over: usize,
    pub pollen_collected: u32,
    pub pickups: u64,
    pub deliveries: u64,
    /// Mean bee distance from the hive at the end of the run
    pub mean_distance_from_hive: f32,
}

impl SimulationOutput {
    pub fn new(ecosystem: Ecosystem, elapsed: Duration) -> Self {
        let ctx = ecosystem.context();
        let bees = ecosystem.bees();
        let log = ecosystem.log();
        let hive_pos = ecosystem.hive().position();

        let bees_born = log.count_where(|e| matches!(e, SimulationEvent::BeeBorn { .. }));
        let flowers_turned_over = log.flowers_bloomed as usize;
        let returning_at_end = bees.iter().filter(|b| b.mode() == BeeMode::Returning).count();
        let mean_distance_from_hive = mean_distance(bees.iter().map(|b| b.position()), hive_pos);

        let statistics = SimulationStats {
            ticks_simulated: ctx.tick(),
            simulated_seconds: ctx.clock(),
            simulation_time_ms: elapsed.as_millis() as u64,
            bees_at_start: ecosystem.initial_population(),
            bees_at_end: bees.len(),
            bees_born,
            returning_at_end,
            flowers_turned_over,
            pollen_collected: ctx.pollen(),
            pickups: log.pickups,
            deliveries: log.deliveries,
            mean_distance_from_hive,
        };

        Self {
            final_state: EcosystemSnapshot {
                tick: ctx.tick(),
                clock: ctx.clock(),
                hive: ecosystem.hive().clone(),
                bees: bees.to_vec(),
                flowers: ecosystem.flowers().iter().copied().collect(),
            },
            history: log.clone(),
            statistics,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let s = &self.statistics;
        format!(
            "Simulated {} ticks ({:.1}s) in {}ms\n\
             {} bees ({} born, {} returning), {} pollen in hive\n\
             {} pickups, {} deliveries, {} flower turnovers",
            s.ticks_simulated,
            s.simulated_seconds,
            s.simulation_time_ms,
            s.bees_at_end,
            s.bees_born,
            s.returning_at_end,
            s.pollen_collected,
            s.pickups,
            s.deliveries,
            s.flowers_turned_over,
        )
    }
}

fn mean_distance(points: impl Iterator<Item = Vec3>, origin: Vec3) -> f32 {
    let (sum, count) = points.fold((0.0f32, 0usize), |(sum, n), p| {
        (sum + p.distance(origin), n + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}

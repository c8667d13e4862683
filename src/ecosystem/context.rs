//! Simulation context - RNG, clock, timers and counters threaded through each tick

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::{AgentId, Tick};

/// Mutable state owned by the ecosystem rather than any single entity
#[derive(Debug, Clone)]
pub struct SimulationContext {
    rng: ChaCha8Rng,
    delta_time: f32,
    tick: Tick,
    /// Simulated seconds since start
    clock: f64,
    since_spawn: f32,
    since_turnover: f32,
    pollen: u32,
    next_agent_id: u32,
}

impl SimulationContext {
    pub fn new(seed: u64, delta_time: f32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            delta_time,
            tick: 0,
            clock: 0.0,
            since_spawn: 0.0,
            since_turnover: 0.0,
            pollen: 0,
            next_agent_id: 0,
        }
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn pollen(&self) -> u32 {
        self.pollen
    }

    pub fn add_pollen(&mut self, amount: u32) -> u32 {
        self.pollen = self.pollen.saturating_add(amount);
        self.pollen
    }

    /// Hand out ids in spawn order
    pub fn next_agent_id(&mut self) -> AgentId {
        let id = AgentId(self.next_agent_id);
        self.next_agent_id += 1;
        id
    }

    /// Seconds between births at the current pollen level
    pub fn spawn_interval(&self, base: f32) -> f32 {
        base / ((self.pollen as f32) + 1.0).sqrt()
    }

    /// True when enough time has passed for another bee; the timer restarts
    pub fn spawn_due(&mut self, base: f32) -> bool {
        if self.since_spawn >= self.spawn_interval(base) {
            self.since_spawn = 0.0;
            true
        } else {
            false
        }
    }

    /// True every `interval` seconds; the timer restarts
    pub fn turnover_due(&mut self, interval: f32) -> bool {
        if self.since_turnover >= interval {
            self.since_turnover = 0.0;
            true
        } else {
            false
        }
    }

    /// Move time forward by one tick
    pub fn advance(&mut self) {
        self.tick += 1;
        self.clock += self.delta_time as f64;
        self.since_spawn += self.delta_time;
        self.since_turnover += self.delta_time;
    }
}

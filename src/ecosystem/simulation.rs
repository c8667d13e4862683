//! Ecosystem - owns the terrain, hive, flowers and bees, and runs the tick loop
//!
//! Tick order:
//! 1. Spawn a bee if the colony is due one
//! 2. Turn over the oldest flower if due
//! 3. Step the swarm against a pre-tick snapshot
//! 4. Collect pollen from bees that reached home
//! 5. Advance the clock

use std::time::Instant;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::BoundBox;
use crate::ecosystem::context::SimulationContext;
use crate::ecosystem::events::{EventLog, SimulationEvent};
use crate::ecosystem::flowers::FlowerField;
use crate::ecosystem::hive::Hive;
use crate::ecosystem::output::SimulationOutput;
use crate::swarm::agent::Agent;
use crate::swarm::step::SwarmStep;
use crate::terrain::{self, HeightField};

pub struct Ecosystem {
    config: SimulationConfig,
    context: SimulationContext,
    terrain: HeightField,
    bounds: BoundBox,
    hive: Hive,
    bees: Vec<Agent>,
    flowers: FlowerField,
    log: EventLog,
    initial_population: usize,
}

impl Ecosystem {
    /// Validate the config, generate terrain, and populate the world
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let mut context = SimulationContext::new(config.seed, config.delta_time);
        let terrain = terrain::build_terrain(&config.terrain, context.rng_mut())?;
        Ok(Self::populate(config, context, terrain))
    }

    /// Use a prepared terrain instead of generating one
    pub fn with_terrain(config: SimulationConfig, terrain: HeightField) -> Result<Self> {
        config.validate()?;
        let context = SimulationContext::new(config.seed, config.delta_time);
        Ok(Self::populate(config, context, terrain))
    }

    fn populate(
        config: SimulationConfig,
        mut context: SimulationContext,
        terrain: HeightField,
    ) -> Self {
        let bounds = terrain.bounds_with_floor(config.terrain.min_height);
        let hive = Hive::new(&terrain, &config.colony);

        let bees: Vec<Agent> = (0..config.colony.initial_bees)
            .map(|_| Agent::new(context.next_agent_id(), hive.position()))
            .collect();

        let mut flowers = FlowerField::new();
        for _ in 0..config.flowers.initial_count {
            flowers.spawn_random(&terrain, &bounds, &config.flowers, 0, context.rng_mut());
        }

        tracing::info!(
            "Ecosystem ready: {}x{} terrain, {} bees, {} flowers",
            terrain.size(),
            terrain.size(),
            bees.len(),
            flowers.len()
        );

        Self {
            initial_population: bees.len(),
            config,
            context,
            terrain,
            bounds,
            hive,
            bees,
            flowers,
            log: EventLog::new(),
        }
    }

    /// Advance the world by one tick
    pub fn tick(&mut self) -> Vec<SimulationEvent> {
        let mut events = Vec::new();
        let tick = self.context.tick();

        self.grow_colony(&mut events);
        self.turn_over_flowers(&mut events);

        let targets = self.flowers.positions();
        let step = SwarmStep::new(
            &self.terrain,
            self.bounds,
            &self.config.behavior,
            self.config.delta_time,
        );
        for (bee, transition) in step.run(&mut self.bees, &targets, self.context.rng_mut()) {
            events.push(SimulationEvent::ModeChanged {
                tick,
                bee,
                transition,
            });
        }

        self.collect_pollen(&mut events);
        self.context.advance();

        for event in &events {
            self.log.record(event);
        }

        events
    }

    /// Run `ticks` ticks, discarding the per-tick events (they stay in the log)
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    fn grow_colony(&mut self, events: &mut Vec<SimulationEvent>) {
        let max = self.config.colony.max_bees;
        if self.bees.len() >= max {
            return;
        }
        if !self.context.spawn_due(self.config.colony.spawn_base_interval) {
            return;
        }

        let tick = self.context.tick();
        let id = self.context.next_agent_id();
        self.bees.push(Agent::new(id, self.hive.position()));
        let population = self.bees.len();

        tracing::info!("Bee {} born, population {}", id.0, population);
        events.push(SimulationEvent::BeeBorn {
            tick,
            bee: id,
            population,
        });

        if population >= max {
            tracing::info!("Colony reached its maximum of {} bees", max);
            events.push(SimulationEvent::ColonyAtCapacity { tick, population });
        }
    }

    fn turn_over_flowers(&mut self, events: &mut Vec<SimulationEvent>) {
        if !self.context.turnover_due(self.config.flowers.turnover_interval) {
            return;
        }

        let tick = self.context.tick();
        if let Some(old) = self.flowers.wither_oldest() {
            events.push(SimulationEvent::FlowerWithered {
                tick,
                position: old.position,
            });
        }

        let position = self.flowers.spawn_random(
            &self.terrain,
            &self.bounds,
            &self.config.flowers,
            tick,
            self.context.rng_mut(),
        );
        tracing::info!("Flower turnover at tick {}, new bloom at {:?}", tick, position);
        events.push(SimulationEvent::FlowerBloomed { tick, position });
    }

    fn collect_pollen(&mut self, events: &mut Vec<SimulationEvent>) {
        let cap = self.config.colony.pollen_cap;
        let tick = self.context.tick();

        for bee in self.bees.iter_mut() {
            if self.context.pollen() >= cap {
                break;
            }
            let amount = bee.take_delivered();
            if amount == 0 {
                continue;
            }

            let hive_total = self.context.add_pollen(amount);
            events.push(SimulationEvent::PollenDelivered {
                tick,
                bee: bee.id(),
                amount,
                hive_total,
            });

            if hive_total >= cap {
                tracing::info!("Hive full with {} pollen", hive_total);
                events.push(SimulationEvent::HiveFull {
                    tick,
                    pollen: hive_total,
                });
            }
        }

        self.hive.resize(self.context.pollen());
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn terrain(&self) -> &HeightField {
        &self.terrain
    }

    pub fn bounds(&self) -> BoundBox {
        self.bounds
    }

    pub fn hive(&self) -> &Hive {
        &self.hive
    }

    pub fn bees(&self) -> &[Agent] {
        &self.bees
    }

    pub fn bees_mut(&mut self) -> &mut [Agent] {
        &mut self.bees
    }

    pub fn flowers(&self) -> &FlowerField {
        &self.flowers
    }

    pub fn flowers_mut(&mut self) -> &mut FlowerField {
        &mut self.flowers
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn initial_population(&self) -> usize {
        self.initial_population
    }

    pub fn into_output(self, started: Instant) -> SimulationOutput {
        SimulationOutput::new(self, started.elapsed())
    }
}

/// Build an ecosystem from config and run it for `config.ticks` ticks
pub fn simulate(config: SimulationConfig) -> Result<SimulationOutput> {
    let start = Instant::now();
    let ticks = config.ticks;

    let mut ecosystem = Ecosystem::new(config)?;
    ecosystem.run(ticks);

    Ok(ecosystem.into_output(start))
}

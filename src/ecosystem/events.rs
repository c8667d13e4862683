//! Events emitted by the ecosystem tick and the log that keeps them

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::types::{AgentId, Tick};
use crate::swarm::agent::ModeTransition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// A new bee emerged at the hive
    BeeBorn { tick: Tick, bee: AgentId, population: usize },
    /// Population reached the configured maximum
    ColonyAtCapacity { tick: Tick, population: usize },
    FlowerWithered { tick: Tick, position: Vec3 },
    FlowerBloomed { tick: Tick, position: Vec3 },
    /// Pollen moved from a bee into the hive
    PollenDelivered { tick: Tick, bee: AgentId, amount: u32, hive_total: u32 },
    /// The hive stopped accepting pollen
    HiveFull { tick: Tick, pollen: u32 },
    ModeChanged { tick: Tick, bee: AgentId, transition: ModeTransition },
}

impl SimulationEvent {
    pub fn tick(&self) -> Tick {
        match self {
            SimulationEvent::BeeBorn { tick, .. }
            | SimulationEvent::ColonyAtCapacity { tick, .. }
            | SimulationEvent::FlowerWithered { tick, .. }
            | SimulationEvent::FlowerBloomed { tick, .. }
            | SimulationEvent::PollenDelivered { tick, .. }
            | SimulationEvent::HiveFull { tick, .. }
            | SimulationEvent::ModeChanged { tick, .. } => *tick,
        }
    }
}

/// Run history
///
/// Mode changes and flower turnover recur for the whole run, so they are
/// tallied instead of stored. Only colony milestones and deliveries are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<SimulationEvent>,
    pub pickups: u64,
    pub deliveries: u64,
    pub flowers_withered: u64,
    pub flowers_bloomed: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &SimulationEvent) {
        match event {
            SimulationEvent::ModeChanged { transition, .. } => match transition {
                ModeTransition::PickedUp => self.pickups += 1,
                ModeTransition::Delivered => self.deliveries += 1,
            },
            SimulationEvent::FlowerWithered { .. } => self.flowers_withered += 1,
            SimulationEvent::FlowerBloomed { .. } => self.flowers_bloomed += 1,
            other => self.events.push(other.clone()),
        }
    }

    pub fn events_at(&self, tick: Tick) -> impl Iterator<Item = &SimulationEvent> {
        self.events.iter().filter(move |e| e.tick() == tick)
    }

    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&SimulationEvent) -> bool,
    {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_changes_are_tallied() {
        let mut log = EventLog::new();
        log.record(&SimulationEvent::ModeChanged {
            tick: 1,
            bee: AgentId(0),
            transition: ModeTransition::PickedUp,
        });
        log.record(&SimulationEvent::ModeChanged {
            tick: 2,
            bee: AgentId(0),
            transition: ModeTransition::Delivered,
        });
        log.record(&SimulationEvent::HiveFull { tick: 2, pollen: 500 });

        assert_eq!(log.pickups, 1);
        assert_eq!(log.deliveries, 1);
        assert_eq!(log.events.len(), 1);
        assert_eq!(log.events_at(2).count(), 1);
        assert_eq!(
            log.count_where(|e| matches!(e, SimulationEvent::HiveFull { .. })),
            1
        );
    }

    #[test]
    fn test_flower_turnover_is_tallied() {
        let mut log = EventLog::new();
        for tick in 0..1000 {
            log.record(&SimulationEvent::FlowerWithered {
                tick,
                position: Vec3::ZERO,
            });
            log.record(&SimulationEvent::FlowerBloomed {
                tick,
                position: Vec3::ONE,
            });
        }

        assert_eq!(log.flowers_withered, 1000);
        assert_eq!(log.flowers_bloomed, 1000);
        assert!(log.events.is_empty());
    }
}

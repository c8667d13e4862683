//! Ecosystem layer: the hive, its flowers, colony growth and the tick loop
//!
//! Everything the bees do not own themselves lives here. The swarm core only
//! sees the flower positions and the terrain handed to it each tick.

pub mod context;
pub mod events;
pub mod flowers;
pub mod hive;
pub mod output;
pub mod simulation;

pub use context::SimulationContext;
pub use events::{EventLog, SimulationEvent};
pub use flowers::{Flower, FlowerField};
pub use hive::Hive;
pub use output::SimulationOutput;
pub use simulation::{simulate, Ecosystem};

//! Swarm behavior - bees, their steering forces, and the per-tick step

pub mod agent;
pub mod constants;
pub mod forces;
pub mod snapshot;
pub mod step;

pub use agent::{Agent, BeeMode, ModeTransition, UpdateContext};
pub use constants::BehaviorParams;
pub use snapshot::SwarmSnapshot;
pub use step::SwarmStep;

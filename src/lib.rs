//! Hive Swarm - bee colony simulation over fractal terrain

pub mod core;
pub mod ecosystem;
pub mod render;
pub mod swarm;
pub mod terrain;

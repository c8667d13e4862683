//! Rendering view of the ecosystem
//!
//! Turns simulation state into per-entity draw data. This module is
//! READ-ONLY - it never modifies simulation state.

pub mod colors;
pub mod transform;

pub use colors::Color;
pub use transform::{Mesh, Renderable, Transform};

use glam::Mat4;

use crate::ecosystem::Ecosystem;

/// Lightweight snapshot of one drawable entity
#[derive(Debug, Clone, Copy)]
pub struct RenderEntity {
    pub mesh: Mesh,
    pub model: Mat4,
    pub color: Color,
}

impl RenderEntity {
    pub fn of<R: Renderable>(item: &R) -> Self {
        Self {
            mesh: item.mesh(),
            model: item.model_matrix(),
            color: item.color(),
        }
    }
}

/// Collects every drawable entity into a reusable buffer.
/// Call this once per frame, passing the same buffer to avoid allocations.
pub fn collect_render_entities(ecosystem: &Ecosystem, buffer: &mut Vec<RenderEntity>) {
    buffer.clear();

    buffer.push(RenderEntity::of(ecosystem.hive()));
    buffer.extend(ecosystem.flowers().iter().map(RenderEntity::of));
    buffer.extend(ecosystem.bees().iter().map(RenderEntity::of));
}

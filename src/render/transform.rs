//! Model transforms and the `Renderable` capability
//!
//! Every mesh is authored facing +Z with +Y up.

use std::f32::consts::PI;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::ecosystem::flowers::Flower;
use crate::ecosystem::hive::Hive;
use crate::render::colors::{self, Color};
use crate::swarm::agent::Agent;
use crate::swarm::constants::DEGENERATE_LENGTH;

/// Bee models are tiny and get scaled up for visibility
pub const BEE_SCALE: f32 = 7.5;

/// The flower asset is authored in large units
pub const FLOWER_SCALE: f32 = 0.0035;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mesh {
    Bee,
    Flower,
    Hive,
}

impl Mesh {
    /// Asset file the mesh is loaded from
    pub fn asset_path(&self) -> &'static str {
        match self {
            Mesh::Bee => "assets/bee.obj",
            Mesh::Flower => "assets/flower.obj",
            Mesh::Hive => "assets/hive.obj",
        }
    }
}

/// Translation, rotation and uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation,
            self.translation,
        )
    }
}

/// Turn model +Z toward `facing` about the vertical axis
///
/// Only the XZ projection counts so models stay upright. Returns identity
/// when the projection is degenerate.
pub fn yaw_toward(facing: Vec3) -> Quat {
    let flat = Vec3::new(facing.x, 0.0, facing.z);
    if flat.length() <= DEGENERATE_LENGTH {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_y(flat.x.atan2(flat.z))
}

/// Anything the renderer draws
pub trait Renderable {
    fn transform(&self) -> Transform;
    fn color(&self) -> Color;
    fn mesh(&self) -> Mesh;

    fn model_matrix(&self) -> Mat4 {
        self.transform().matrix()
    }
}

impl Renderable for Agent {
    fn transform(&self) -> Transform {
        Transform::at(self.position())
            .with_rotation(yaw_toward(self.facing()))
            .with_scale(BEE_SCALE)
    }

    fn color(&self) -> Color {
        colors::bee_color(self.mode())
    }

    fn mesh(&self) -> Mesh {
        Mesh::Bee
    }
}

impl Renderable for Flower {
    fn transform(&self) -> Transform {
        Transform::at(self.position).with_scale(FLOWER_SCALE)
    }

    fn color(&self) -> Color {
        colors::FLOWER
    }

    fn mesh(&self) -> Mesh {
        Mesh::Flower
    }
}

impl Renderable for Hive {
    /// Hung upside down from its facing, scaled with stored pollen
    fn transform(&self) -> Transform {
        let upside_down = Quat::from_rotation_z(PI);
        Transform::at(self.position())
            .with_rotation(yaw_toward(self.facing()) * upside_down)
            .with_scale(self.size())
    }

    fn color(&self) -> Color {
        colors::HIVE
    }

    fn mesh(&self) -> Mesh {
        Mesh::Hive
    }
}

//! Steering forces
//!
//! Each function computes one term of a bee's acceleration from read-only
//! inputs. Singular cases (empty neighbourhoods, zero distances) contribute
//! nothing instead of producing infinities.

use glam::Vec3;
use rand::Rng;

use crate::core::types::BoundBox;
use crate::swarm::constants::{BehaviorParams, DEGENERATE_LENGTH};
use crate::swarm::snapshot::SwarmSnapshot;

/// Cohesion and alignment terms derived from nearby swarm members
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwarmBias {
    /// Added to acceleration
    pub position: Vec3,
    /// Added directly to velocity
    pub direction: Vec3,
}

/// Result of scanning the flower list
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForageOutcome {
    pub force: Vec3,
    /// A flower was within pickup range
    pub reached: bool,
}

/// Average position and facing of members within `swarm_radius`
///
/// The bee itself sits at distance zero and always counts. Both averages are
/// normalised and scaled by `swarm_strength`.
pub fn swarm_bias(position: Vec3, swarm: &SwarmSnapshot, params: &BehaviorParams) -> SwarmBias {
    let mut sum_pos = Vec3::ZERO;
    let mut sum_dir = Vec3::ZERO;
    let mut count = 0usize;

    for (member_pos, member_dir) in swarm.members() {
        if member_pos.distance(position) < params.swarm_radius {
            sum_pos += member_pos;
            sum_dir += member_dir;
            count += 1;
        }
    }

    if count == 0 {
        return SwarmBias::default();
    }

    let n = count as f32;
    SwarmBias {
        position: scaled_direction(sum_pos / n, params.swarm_strength),
        direction: scaled_direction(sum_dir / n, params.swarm_strength),
    }
}

/// Constant-magnitude pull from `from` toward `to`
pub fn seek(from: Vec3, to: Vec3, strength: f32) -> Vec3 {
    scaled_direction(to - from, strength)
}

/// Sum of pulls toward every sensed flower
///
/// Every flower inside `object_sense_radius` pulls; any of them inside
/// `interaction_radius` marks the outcome as reached. NaN points are skipped.
pub fn forage_force(position: Vec3, targets: &[Vec3], params: &BehaviorParams) -> ForageOutcome {
    let mut outcome = ForageOutcome::default();
    let strength = params.seek_strength();

    for &point in targets {
        if point.is_nan() {
            continue;
        }
        let offset = point - position;
        let r = offset.length();
        if r < params.object_sense_radius && r != 0.0 {
            outcome.force += offset / r * strength;
            if r < params.interaction_radius {
                outcome.reached = true;
            }
        }
    }

    outcome
}

/// Short-range repulsion, magnitude `avoidance_strength / r^2`
pub fn avoidance_force(position: Vec3, obstacles: &[Vec3], params: &BehaviorParams) -> Vec3 {
    let mut force = Vec3::ZERO;

    for &point in obstacles {
        if point.is_nan() {
            continue;
        }
        let offset = position - point;
        let r = offset.length();
        if r < params.obstacle_radius && r != 0.0 {
            let push = (offset / r) * (params.avoidance_strength / (r * r));
            if push.is_finite() {
                force += push;
            }
        }
    }

    force
}

/// Keeps bees inside the world box
///
/// Inside the `boundary_radius` margin of a face, each axis gets a restoring
/// term inversely proportional to the distance from that face. The floor is the
/// terrain under the bee rather than the box minimum. A bee outside the box on
/// any axis additionally gets a strong pull straight home.
pub fn containment_force(
    position: Vec3,
    home: Vec3,
    bounds: &BoundBox,
    ground_height: f32,
    params: &BehaviorParams,
) -> Vec3 {
    let p = position;
    let margin = params.boundary_radius;
    let k = params.containment_strength;
    let mut force = Vec3::ZERO;

    if p.x < bounds.min.x + margin {
        force.x += inverse(k, p.x - bounds.min.x);
    }
    if p.x > bounds.max.x - margin {
        force.x -= inverse(k, bounds.max.x - p.x);
    }
    if p.y < bounds.min.y + margin {
        force.y += inverse(k, p.y - ground_height);
    }
    if p.y > bounds.max.y - margin {
        force.y -= inverse(k, bounds.max.y - p.y);
    }
    if p.z < bounds.min.z + margin {
        force.z += inverse(k, p.z - bounds.min.z);
    }
    if p.z > bounds.max.z - margin {
        force.z -= inverse(k, bounds.max.z - p.z);
    }

    if is_escaped(p, bounds) {
        force += (home - p) * k;
    }

    force
}

/// Outside the box on any axis
pub fn is_escaped(p: Vec3, bounds: &BoundBox) -> bool {
    p.x < bounds.min.x
        || p.x > bounds.max.x
        || p.y < bounds.min.y
        || p.y > bounds.max.y
        || p.z < bounds.min.z
        || p.z > bounds.max.z
}

/// Uniform point in the cube [-1, 1]^3
pub fn random_unit_cube<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
    )
}

/// Rescale to `max_speed` when faster; non-finite velocities collapse to zero
pub fn clamp_speed(velocity: Vec3, max_speed: f32) -> Vec3 {
    if !velocity.is_finite() {
        return Vec3::ZERO;
    }
    if velocity.length() > max_speed {
        velocity.normalize() * max_speed
    } else {
        velocity
    }
}

fn scaled_direction(v: Vec3, strength: f32) -> Vec3 {
    if v.length() > DEGENERATE_LENGTH {
        v.normalize() * strength
    } else {
        Vec3::ZERO
    }
}

fn inverse(strength: f32, distance: f32) -> f32 {
    if distance == 0.0 {
        return 0.0;
    }
    let value = strength / distance;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

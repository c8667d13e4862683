//! Integration tests for the bee force model
//!
//! These tests verify the behavioral guarantees of one update:
//! - Speed never exceeds the maximum afterwards
//! - Foraging flips to Returning at a flower, and pollen is ready only at home
//! - A full trip delivers exactly one unit
//! - Escaped bees are pulled back toward home
//! - Close bees repel with inverse-square strength

use glam::Vec3;
use hive_swarm::core::types::{AgentId, BoundBox};
use hive_swarm::swarm::forces::{avoidance_force, containment_force};
use hive_swarm::swarm::{
    Agent, BeeMode, BehaviorParams, ModeTransition, SwarmSnapshot, SwarmStep, UpdateContext,
};
use hive_swarm::terrain::HeightField;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn terrain() -> HeightField {
    HeightField::flat(101, 1.0).unwrap()
}

fn world_box() -> BoundBox {
    BoundBox::new(Vec3::new(-50.0, 0.0, -50.0), Vec3::new(50.0, 30.0, 50.0))
}

fn update_alone(
    bee: &mut Agent,
    targets: &[Vec3],
    params: &BehaviorParams,
    rng: &mut ChaCha8Rng,
) -> Option<ModeTransition> {
    let terrain = terrain();
    let bounds = world_box();
    let swarm = SwarmSnapshot::capture(std::slice::from_ref(bee));
    let ctx = UpdateContext {
        delta_time: 0.1,
        obstacles: swarm.positions(),
        targets,
        bounds: &bounds,
        swarm: &swarm,
        terrain: &terrain,
        params,
    };
    bee.update(&ctx, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn speed_never_exceeds_max_after_update(
        px in -60.0f32..60.0,
        py in -5.0f32..40.0,
        pz in -60.0f32..60.0,
        vx in -1.0e4f32..1.0e4,
        vy in -1.0e4f32..1.0e4,
        vz in -1.0e4f32..1.0e4,
        seed in any::<u64>(),
    ) {
        let params = BehaviorParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut bee = Agent::new(AgentId(0), Vec3::new(0.0, 15.0, 0.0));
        bee.set_position(Vec3::new(px, py, pz));
        bee.set_velocity(Vec3::new(vx, vy, vz));

        let targets = [Vec3::new(px + 1.0, py, pz), Vec3::new(3.0, 4.0, 5.0)];
        update_alone(&mut bee, &targets, &params, &mut rng);

        prop_assert!(bee.velocity().length() <= params.max_speed + 1e-3);
        prop_assert!(bee.position().is_finite());
    }

    #[test]
    fn escaped_bee_accelerates_toward_home(
        axis in 0usize..6,
        overshoot in 0.5f32..200.0,
        offset in -20.0f32..20.0,
    ) {
        let bounds = world_box();
        let home = Vec3::new(0.0, 2.0, 0.0);
        let p = match axis {
            0 => Vec3::new(bounds.max.x + overshoot, 15.0, offset),
            1 => Vec3::new(bounds.min.x - overshoot, 15.0, offset),
            2 => Vec3::new(offset, 15.0, bounds.max.z + overshoot),
            3 => Vec3::new(offset, 15.0, bounds.min.z - overshoot),
            4 => Vec3::new(offset, bounds.max.y + overshoot, offset),
            _ => Vec3::new(offset, bounds.min.y - overshoot, offset),
        };

        let force = containment_force(p, home, &bounds, 0.0, &BehaviorParams::default());
        prop_assert!(force.dot(home - p) > 0.0);
    }
}

#[test]
fn test_pickup_then_ready_only_at_home() {
    let params = BehaviorParams::default();
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let home = Vec3::new(0.0, 15.0, 0.0);
    let mut bee = Agent::new(AgentId(0), home);
    bee.set_position(Vec3::new(-20.0, 15.0, 10.0));

    let flower = Vec3::new(-21.0, 15.0, 11.0);
    assert_eq!(
        update_alone(&mut bee, &[flower], &params, &mut rng),
        Some(ModeTransition::PickedUp)
    );
    assert_eq!(bee.mode(), BeeMode::Returning);
    assert!(!bee.resource_ready());

    // Carrying bees ignore flowers
    let here = bee.position() + Vec3::new(0.5, 0.0, 0.0);
    assert_eq!(update_alone(&mut bee, &[here], &params, &mut rng), None);
    assert_eq!(bee.mode(), BeeMode::Returning);
    assert!(!bee.resource_ready());
}

#[test]
fn test_round_trip_delivers_exactly_one() {
    let params = BehaviorParams {
        noise_scale: 0.0,
        swarm_strength: 0.0,
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let home = Vec3::new(0.0, 15.0, 0.0);
    let mut bee = Agent::new(AgentId(0), home);

    assert_eq!(
        update_alone(&mut bee, &[home + Vec3::new(1.0, 0.0, 0.0)], &params, &mut rng),
        Some(ModeTransition::PickedUp)
    );

    let mut deliveries = 0;
    for _ in 0..1000 {
        if update_alone(&mut bee, &[], &params, &mut rng) == Some(ModeTransition::Delivered) {
            deliveries += 1;
            break;
        }
    }

    assert_eq!(deliveries, 1);
    assert_eq!(bee.total_delivered(), 1);
    assert!(bee.resource_ready());
    assert_eq!(bee.mode(), BeeMode::Foraging);
}

#[test]
fn test_close_pair_repels_inverse_square() {
    let params = BehaviorParams::default();
    let a = Vec3::new(0.0, 10.0, 0.0);
    let b = a + Vec3::new(0.1, 0.0, 0.0);

    let on_a = avoidance_force(a, &[a, b], &params);
    let on_b = avoidance_force(b, &[a, b], &params);
    assert!(on_a.x < 0.0 && on_b.x > 0.0);
    assert!((on_a + on_b).length() < 1e-3);

    let c = a + Vec3::new(0.05, 0.0, 0.0);
    let closer = avoidance_force(a, &[c], &params);
    let ratio = closer.length() / on_a.length();
    assert!((ratio - 4.0).abs() < 1e-2, "ratio {}", ratio);
}

#[test]
fn test_swarm_step_over_many_ticks_stays_sane() {
    let terrain = terrain();
    let params = BehaviorParams::default();
    let step = SwarmStep::new(&terrain, world_box(), &params, 0.1);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let home = Vec3::new(0.0, 2.0, 0.0);
    let mut bees: Vec<Agent> = (0..30).map(|i| Agent::new(AgentId(i), home)).collect();
    let flowers = [Vec3::new(15.0, 0.5, 15.0), Vec3::new(-20.0, 0.5, 5.0)];

    for _ in 0..500 {
        step.run(&mut bees, &flowers, &mut rng);
    }

    for bee in &bees {
        assert!(bee.position().is_finite());
        assert!(bee.velocity().length() <= params.max_speed + 1e-3);
        assert!((bee.facing().length() - 1.0).abs() < 1e-3);
    }
}

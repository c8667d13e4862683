//! Integration tests for terrain generation
//!
//! These tests verify the generator's structural guarantees:
//! - Every odd grid size yields size x size finite samples
//! - The border is flat
//! - Seeded runs are reproducible
//! - heightAt reads samples exactly and returns 0 outside the grid

use hive_swarm::core::config::TerrainConfig;
use hive_swarm::terrain::{build_terrain, HeightField, SeedMap, TerrainGenerator};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generated_grid_is_square_finite_and_flat_bordered(
        half in 1usize..40,
        displacement in 0.0f32..20.0,
        seed in any::<u64>(),
    ) {
        let size = half * 2 + 1;
        let generator = TerrainGenerator::new(size, displacement).unwrap();
        let field = generator.generate(None, &mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(field.size(), size);
        prop_assert_eq!(field.samples().len(), size * size);
        prop_assert!(field.samples().iter().all(|h| h.is_finite()));

        let last = size - 1;
        for i in 0..size {
            prop_assert_eq!(field.sample(0, i), Some(0.0));
            prop_assert_eq!(field.sample(last, i), Some(0.0));
            prop_assert_eq!(field.sample(i, 0), Some(0.0));
            prop_assert_eq!(field.sample(i, last), Some(0.0));
        }
    }

    #[test]
    fn height_at_outside_grid_is_zero(
        x in prop_oneof![-1000.0f32..-9.5, 8.5f32..1000.0],
        z in -1000.0f32..1000.0,
    ) {
        let samples = vec![3.0; 17 * 17];
        let field = HeightField::new(17, samples, 2.0).unwrap();
        prop_assert_eq!(field.height_at(x, z), 0.0);
        prop_assert_eq!(field.height_at(z, x), 0.0);
    }

    #[test]
    fn height_at_inside_grid_is_exact_sample(
        ix in 0usize..17,
        iz in 0usize..17,
        fx in 0.0f32..0.99,
        fz in 0.0f32..0.99,
    ) {
        let samples: Vec<f32> = (0..17 * 17).map(|i| i as f32 * 0.5).collect();
        let field = HeightField::new(17, samples, 2.0).unwrap();
        let x = ix as f32 - 8.5 + fx;
        let z = iz as f32 - 8.5 + fz;
        prop_assert_eq!(field.height_at(x, z), field.sample(ix, iz).unwrap());
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let seed = SeedMap::parse("1 3 5 3 1\n3 5 5 5 3\n5 5 5 5 5\n3 5 5 5 3\n1 3 5 3 1").unwrap();
    let generator = TerrainGenerator::from_detail(4).unwrap();

    let a = generator.generate(Some(&seed), &mut ChaCha8Rng::seed_from_u64(3));
    let b = generator.generate(Some(&seed), &mut ChaCha8Rng::seed_from_u64(3));

    assert_eq!(a.samples(), b.samples());
    // Interior seed points survive untouched
    let d = generator.displacement();
    assert_eq!(a.sample(3, 3), Some(d));
    assert_eq!(a.sample(6, 6), Some(d));
}

#[test]
fn test_heights_stay_within_decaying_envelope() {
    // First round: corners +/-d, centre +/-2d, edge midpoints (2d + 2d) / 3 + d = 7d/3.
    // Later rounds average and add 0..d/2, 0..d/4, ... which stays under d.
    let generator = TerrainGenerator::from_detail(6).unwrap();
    let d = generator.displacement();
    for seed in 0..32 {
        let field = generator.generate(None, &mut ChaCha8Rng::seed_from_u64(seed));
        assert!(field.max_height() <= 10.0 * d / 3.0 + 1e-3);
        assert!(field.min_height() >= -7.0 * d / 3.0 - 1e-3);
    }
}

#[test]
fn test_build_terrain_with_seed_file() {
    let path = std::env::temp_dir().join(format!("hive_swarm_seed_{}.txt", std::process::id()));
    std::fs::write(&path, "5 5 5\n5 5 5\n5 5 5\n").unwrap();

    let config = TerrainConfig {
        detail: 3,
        seed_map: Some(path.clone()),
        ..Default::default()
    };
    let field = build_terrain(&config, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(field.size(), 9);
    assert_eq!(field.sample(3, 3), Some(1.25f32.powi(3)));
}

#[test]
fn test_malformed_seed_file_is_an_error() {
    let path =
        std::env::temp_dir().join(format!("hive_swarm_bad_seed_{}.txt", std::process::id()));
    std::fs::write(&path, "1 2 three\n").unwrap();

    let config = TerrainConfig {
        detail: 3,
        seed_map: Some(path.clone()),
        ..Default::default()
    };
    let result = build_terrain(&config, &mut ChaCha8Rng::seed_from_u64(0));
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}

//! Diamond-square terrain generation
//!
//! A cell holding exactly 0.0 counts as unset and is filled by the passes;
//! anything non-zero (seeded corners or seed-map samples) is left alone.
//! The first round perturbs by +/-displacement; every later round perturbs
//! by 0..scale only, with scale halving each round.

use rand::Rng;

use crate::core::config::MAX_TERRAIN_DETAIL;
use crate::core::error::{Result, SimError};
use crate::terrain::height_field::HeightField;
use crate::terrain::seed_map::{SeedMap, SEED_STRIDE};

/// Displacement grows by this factor per level of detail
pub const DISPLACEMENT_BASE: f32 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainGenerator {
    grid_size: usize,
    displacement: f32,
}

impl TerrainGenerator {
    pub fn new(grid_size: usize, displacement: f32) -> Result<Self> {
        if grid_size < 3 || grid_size % 2 == 0 {
            return Err(SimError::InvalidGridSize(grid_size));
        }
        if !(displacement >= 0.0 && displacement.is_finite()) {
            return Err(SimError::InvalidDisplacement(displacement));
        }
        Ok(Self {
            grid_size,
            displacement,
        })
    }

    /// Grid side 2^n + 1 with displacement 1.25^n, for n in 1..=MAX_TERRAIN_DETAIL
    pub fn from_detail(detail: u32) -> Result<Self> {
        if detail == 0 || detail > MAX_TERRAIN_DETAIL {
            return Err(SimError::InvalidDetail(detail));
        }
        Self::new((1usize << detail) + 1, DISPLACEMENT_BASE.powi(detail as i32))
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Run the fractal and return the finished field
    pub fn generate<R: Rng>(&self, seed: Option<&SeedMap>, rng: &mut R) -> HeightField {
        let size = self.grid_size;
        let mut grid = Grid::new(size);
        let mut scale = self.displacement;
        let mut spread = Spread::symmetric(scale);

        tracing::info!(
            "Generating {}x{} terrain (displacement {:.3})",
            size,
            size,
            self.displacement
        );

        match seed {
            Some(map) => scatter_seed(&mut grid, map, self.displacement),
            None => {
                let last = size - 1;
                for (x, z) in [(0, 0), (0, last), (last, 0), (last, last)] {
                    grid.set(x, z, spread.draw(rng));
                }
            }
        }

        let mut step = size / 2;
        while step > 1 {
            let half = step / 2;
            diamond_pass(&mut grid, step, half, spread, rng);
            square_pass(&mut grid, step, half, spread, rng);

            step /= 2;
            scale /= 2.0;
            spread = Spread::upward(scale);
        }

        grid.flatten_border();

        HeightField::from_parts(size, grid.cells, self.displacement)
    }
}

/// Square sample grid indexed `[x][z]`
struct Grid {
    size: usize,
    cells: Vec<f32>,
}

impl Grid {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    #[inline]
    fn get(&self, x: usize, z: usize) -> f32 {
        self.cells[x * self.size + z]
    }

    #[inline]
    fn set(&mut self, x: usize, z: usize, value: f32) {
        self.cells[x * self.size + z] = value;
    }

    #[inline]
    fn is_unset(&self, x: usize, z: usize) -> bool {
        self.get(x, z) == 0.0
    }

    fn flatten_border(&mut self) {
        let last = self.size - 1;
        for i in 0..self.size {
            self.set(0, i, 0.0);
            self.set(last, i, 0.0);
            self.set(i, 0, 0.0);
            self.set(i, last, 0.0);
        }
    }
}

/// Uniform perturbation range for one round
#[derive(Debug, Clone, Copy)]
struct Spread {
    low: f32,
    high: f32,
}

impl Spread {
    fn symmetric(scale: f32) -> Self {
        Self {
            low: -scale,
            high: scale,
        }
    }

    fn upward(scale: f32) -> Self {
        Self {
            low: 0.0,
            high: scale,
        }
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.low..=self.high)
    }
}

fn scatter_seed(grid: &mut Grid, map: &SeedMap, displacement: f32) {
    let mut skipped = 0usize;

    for (i, row) in map.scaled(displacement).iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let (x, z) = (i * SEED_STRIDE, j * SEED_STRIDE);
            if x < grid.size && z < grid.size {
                grid.set(x, z, value);
            } else {
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "{} height map samples fall outside the {}x{} grid and were ignored",
            skipped,
            grid.size,
            grid.size
        );
    }
}

/// Fill each step-aligned cell centre from its four corners
fn diamond_pass<R: Rng>(grid: &mut Grid, step: usize, half: usize, spread: Spread, rng: &mut R) {
    let size = grid.size;
    let last = size - 1;

    for x in (0..last).step_by(step) {
        for z in (0..last).step_by(step) {
            let (cx, cz) = (x + half, z + half);
            if cx >= size || cz >= size || !grid.is_unset(cx, cz) {
                continue;
            }

            // Corners clamp to the grid edge on sizes that are not 2^n + 1
            let x1 = (x + step).min(last);
            let z1 = (z + step).min(last);
            let average =
                (grid.get(x, z) + grid.get(x1, z) + grid.get(x, z1) + grid.get(x1, z1)) / 4.0;
            grid.set(cx, cz, average + spread.draw(rng));
        }
    }
}

/// Fill edge midpoints from their in-bounds neighbours at distance `half`
fn square_pass<R: Rng>(grid: &mut Grid, step: usize, half: usize, spread: Spread, rng: &mut R) {
    let size = grid.size;

    for x in (0..size).step_by(half) {
        for z in ((x + half) % step..size).step_by(step) {
            if !grid.is_unset(x, z) {
                continue;
            }

            let mut sum = 0.0;
            let mut count = 0;
            if x >= half {
                sum += grid.get(x - half, z);
                count += 1;
            }
            if x + half < size {
                sum += grid.get(x + half, z);
                count += 1;
            }
            if z >= half {
                sum += grid.get(x, z - half);
                count += 1;
            }
            if z + half < size {
                sum += grid.get(x, z + half);
                count += 1;
            }

            grid.set(x, z, sum / count as f32 + spread.draw(rng));
        }
    }
}

//! Height field - the immutable elevation grid bees fly over
//!
//! Samples are stored row-major with the x index first, so `(ix, iz)` maps to
//! `ix * size + iz`. World coordinates are centred: grid index
//! `i` covers world coordinate `i - size / 2`.

use glam::Vec3;

use crate::core::error::{Result, SimError};
use crate::core::types::BoundBox;

#[derive(Debug, Clone)]
pub struct HeightField {
    size: usize,
    samples: Vec<f32>,
    displacement: f32,
    bounds: BoundBox,
}

impl HeightField {
    /// Build from a row-major sample buffer, validating shape and values
    pub fn new(size: usize, samples: Vec<f32>, displacement: f32) -> Result<Self> {
        if size < 3 || size % 2 == 0 {
            return Err(SimError::InvalidGridSize(size));
        }
        if !(displacement >= 0.0 && displacement.is_finite()) {
            return Err(SimError::InvalidDisplacement(displacement));
        }
        if samples.len() != size * size {
            return Err(SimError::InvalidConfig(format!(
                "expected {} samples for a {}x{} grid, got {}",
                size * size,
                size,
                size,
                samples.len()
            )));
        }
        if samples.iter().any(|h| !h.is_finite()) {
            return Err(SimError::InvalidConfig("height samples must be finite".into()));
        }

        Ok(Self::from_parts(size, samples, displacement))
    }

    /// Build from nested rows (`rows[ix][iz]`)
    pub fn from_rows(rows: Vec<Vec<f32>>, displacement: f32) -> Result<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(SimError::InvalidConfig("height rows must form a square grid".into()));
        }
        Self::new(size, rows.into_iter().flatten().collect(), displacement)
    }

    /// A field of zeros
    pub fn flat(size: usize, displacement: f32) -> Result<Self> {
        Self::new(size, vec![0.0; size * size], displacement)
    }

    /// Trusted constructor for the generator, which already upholds the invariants
    pub(crate) fn from_parts(size: usize, samples: Vec<f32>, displacement: f32) -> Self {
        let half = size as f32 / 2.0;
        let bounds = BoundBox::new(
            Vec3::new(-half, 0.0, -half),
            Vec3::new(half, displacement * displacement, half),
        );
        Self {
            size,
            samples,
            displacement,
            bounds,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Sample at grid indices, `None` outside the grid
    pub fn sample(&self, ix: usize, iz: usize) -> Option<f32> {
        if ix < self.size && iz < self.size {
            Some(self.samples[ix * self.size + iz])
        } else {
            None
        }
    }

    /// Iterate grid rows (fixed x, varying z)
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.samples.chunks(self.size)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Ground height under a world (x, z) position
    ///
    /// Coordinates are shifted by half the grid and truncated toward zero.
    /// Queries outside the grid read as 0.0. No interpolation.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let half = self.size as f32 / 2.0;
        let gx = (x + half) as i64;
        let gz = (z + half) as i64;
        let size = self.size as i64;

        if gx < 0 || gx >= size || gz < 0 || gz >= size {
            return 0.0;
        }

        self.samples[gx as usize * self.size + gz as usize]
    }

    /// World box with a floor of 0.0
    pub fn bounds(&self) -> BoundBox {
        self.bounds
    }

    /// World box with a custom floor
    ///
    /// The ceiling is displacement squared, not the tallest sample.
    pub fn bounds_with_floor(&self, min_height: f32) -> BoundBox {
        let mut bounds = self.bounds;
        bounds.min.y = min_height;
        bounds
    }

    pub fn min_height(&self) -> f32 {
        self.samples.iter().copied().fold(f32::INFINITY, f32::min)
    }

    pub fn max_height(&self) -> f32 {
        self.samples.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn mean_height(&self) -> f32 {
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }
}

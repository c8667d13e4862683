//! Height-map seed files
//!
//! A seed map is plain text: one grid row per line, whitespace-separated
//! integers in 1..=5. Each sample pre-seeds every third grid point before
//! the fractal fills in the rest.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::{Result, SimError};

/// Lowest and highest seed levels
pub const SEED_LEVEL_MIN: i32 = 1;
pub const SEED_LEVEL_MAX: i32 = 5;

/// Grid stride between consecutive seed samples
pub const SEED_STRIDE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMap {
    rows: Vec<Vec<i32>>,
}

impl SeedMap {
    pub fn new(rows: Vec<Vec<i32>>) -> Self {
        Self { rows }
    }

    /// Read a seed map, returning `Ok(None)` when the file does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::info!("Height map found at {}, loading", path.display());
                Self::parse(&contents).map(Some)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No height map at {}, randomizing", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (line_idx, line) in contents.lines().enumerate() {
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let value: i32 = token.parse().map_err(|_| SimError::SeedParse {
                    line: line_idx + 1,
                    token: token.to_string(),
                })?;
                if !(SEED_LEVEL_MIN..=SEED_LEVEL_MAX).contains(&value) {
                    tracing::warn!(
                        "Height map line {}: level {} outside {}..={}",
                        line_idx + 1,
                        value,
                        SEED_LEVEL_MIN,
                        SEED_LEVEL_MAX
                    );
                }
                row.push(value);
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Remap every level from 1..=5 linearly onto 0..=displacement
    pub fn scaled(&self, displacement: f32) -> Vec<Vec<f32>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| scale_level(v, displacement)).collect())
            .collect()
    }
}

fn scale_level(value: i32, displacement: f32) -> f32 {
    let span = (SEED_LEVEL_MAX - SEED_LEVEL_MIN) as f32;
    (value - SEED_LEVEL_MIN) as f32 / span * displacement
}

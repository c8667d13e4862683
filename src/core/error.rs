use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Grid size must be odd and >= 3, got {0}")]
    InvalidGridSize(usize),

    #[error(
        "Terrain detail must be in 1..={max}, got {0}",
        max = crate::core::config::MAX_TERRAIN_DETAIL
    )]
    InvalidDetail(u32),

    #[error("Displacement must be finite and non-negative, got {0}")]
    InvalidDisplacement(f32),

    #[error("Height map line {line}: expected an integer, found {token:?}")]
    SeedParse { line: usize, token: String },
}

pub type Result<T> = std::result::Result<T, SimError>;

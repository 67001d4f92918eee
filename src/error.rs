//! Error types for the rendering pipeline.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("{field} must be a finite number >= 0 (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("margins leave no drawable area in a {width}x{height} diagram")]
    NoDrawableArea { width: f64, height: f64 },

    #[error("unknown palette preset '{name}'; available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout area must be positive (got {width}x{height})")]
    EmptyArea { width: f64, height: f64 },

    #[error("flow graph is inconsistent: {0}")]
    InvalidGraph(String),

    #[error("layout adapter failed: {0}")]
    Adapter(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SankeyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

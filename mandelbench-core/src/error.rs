//! Validation and configuration error types.

use thiserror::Error;

/// Input rejected before any grid is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid region: re [{re_min}, {re_max}), im [{im_min}, {im_max}) (bounds must be finite with min < max)")]
    InvalidRegion {
        re_min: f64,
        re_max: f64,
        im_min: f64,
        im_max: f64,
    },

    #[error("invalid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("invalid iteration bound: {0} (must be >= 0)")]
    InvalidIterationBound(i64),
}

/// Failure loading an evaluation configuration from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Evaluation configuration and validation.
//!
//! [`EvaluationParams`] is the raw, caller-supplied form (config files, CLI
//! flags). Signed integers keep negative inputs representable so they are
//! rejected with the right [`ValidationError`] instead of failing to parse.
//! [`EvaluationConfig`] is the validated form every evaluator takes.

use crate::{ConfigError, Region, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unvalidated evaluation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationParams {
    pub width: i64,
    pub height: i64,
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
    pub max_iterations: i64,
}

/// Default run: the full set at one megapixel with a 1000 iteration cap.
pub static DEFAULT_PARAMS: EvaluationParams = EvaluationParams {
    width: 1000,
    height: 1000,
    re_min: -2.0,
    re_max: 1.0,
    im_min: -1.5,
    im_max: 1.5,
    max_iterations: 1000,
};

impl Default for EvaluationParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

impl EvaluationParams {
    /// Load parameters from a JSON file. Missing fields take their defaults.
    ///
    /// Values are not validated here: callers may still override fields
    /// (CLI flags over file values) and call [`validate`](Self::validate)
    /// on the merged result.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Check every bound and produce an immutable configuration.
    ///
    /// Region is checked first, then dimensions, then the iteration bound.
    pub fn validate(&self) -> Result<EvaluationConfig, ValidationError> {
        let region = Region::new(self.re_min, self.re_max, self.im_min, self.im_max)?;

        let invalid_dims = ValidationError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        if self.width <= 0 || self.height <= 0 {
            return Err(invalid_dims);
        }
        let width = usize::try_from(self.width).map_err(|_| invalid_dims.clone())?;
        let height = usize::try_from(self.height).map_err(|_| invalid_dims.clone())?;
        if width.checked_mul(height).is_none() {
            return Err(invalid_dims);
        }

        let max_iterations = u32::try_from(self.max_iterations)
            .map_err(|_| ValidationError::InvalidIterationBound(self.max_iterations))?;

        Ok(EvaluationConfig {
            width,
            height,
            region,
            max_iterations,
        })
    }
}

/// Validated, immutable evaluation configuration.
///
/// Only obtainable through [`EvaluationParams::validate`] or
/// [`EvaluationConfig::new`], so the grid is never empty and the region is
/// always well formed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EvaluationConfig {
    width: usize,
    height: usize,
    region: Region,
    max_iterations: u32,
}

impl EvaluationConfig {
    pub fn new(
        width: usize,
        height: usize,
        region: Region,
        max_iterations: u32,
    ) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(ValidationError::InvalidDimensions {
                width: i64::try_from(width).unwrap_or(i64::MAX),
                height: i64::try_from(height).unwrap_or(i64::MAX),
            });
        }
        Ok(Self {
            width,
            height,
            region,
            max_iterations,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

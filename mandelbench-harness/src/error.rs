//! Harness error types.

use mandelbench_compute::ShapeMismatch;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown evaluator: {0}")]
    UnknownEvaluator(String),

    #[error("no evaluators requested")]
    NoEvaluators,

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to serialize metrics: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Comparison(#[from] ShapeMismatch),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

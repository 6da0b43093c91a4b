pub mod batched;
pub mod comparison;
pub mod evaluator;
pub mod registry;
pub mod scalar;

pub use batched::{BatchedEvaluator, BoundaryConvention};
pub use comparison::{classify, compare, CellAgreement, GridComparison, ShapeMismatch};
pub use evaluator::{Evaluation, Evaluator};
pub use registry::{create_evaluator, get_evaluator_info, EvaluatorInfo, EVALUATORS};
pub use scalar::{escape_count, ScalarEvaluator};

/// Squared escape radius (|z| = 2). Iteration continues while `|z|^2 < 4`.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

// Re-export core types for convenience
pub use mandelbench_core::*;

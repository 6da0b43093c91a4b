use mandelbench_core::{EvaluationConfig, ResultGrid};
use std::time::{Duration, Instant};

/// Core trait for computing escape counts over a validated grid.
///
/// Implementations differ only in iteration schedule; given the same
/// configuration they must describe the same set. Evaluation is synchronous,
/// allocates its own buffers and performs no I/O, so a caller can wrap it with
/// whatever timing or resource sampling it needs.
pub trait Evaluator: dyn_clone::DynClone {
    /// Stable identifier (used for registry lookup and output file names)
    fn id(&self) -> &'static str;

    /// Human-readable name for reports
    fn display_name(&self) -> &'static str;

    /// Compute the escape count of every cell.
    fn evaluate(&self, config: &EvaluationConfig) -> ResultGrid;

    /// Compute the grid and measure wall-clock time around the call.
    fn evaluate_timed(&self, config: &EvaluationConfig) -> Evaluation {
        let start = Instant::now();
        let grid = self.evaluate(config);
        let elapsed = start.elapsed();

        log::debug!(
            "{} evaluated {}x{} in {:.3}ms",
            self.id(),
            grid.width(),
            grid.height(),
            elapsed.as_secs_f64() * 1000.0
        );

        Evaluation { grid, elapsed }
    }
}

dyn_clone::clone_trait_object!(Evaluator);

/// Result of a timed evaluation.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub grid: ResultGrid,
    pub elapsed: Duration,
}

impl Evaluation {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

//! Whole-grid escape-time evaluator.
//!
//! Instead of looping per cell, every cell advances together for exactly
//! `max_iterations` rounds. Each round:
//!
//! 1. recompute the active mask `|z|^2 < 4` for every cell from the current state
//! 2. advance `z = z^2 + c` for active cells only; inactive cells are frozen
//!    and never touched again, so their values cannot overflow further
//! 3. record a count for active cells, overwriting the previous round
//!
//! A frozen cell keeps its escaping `z`, so its mask stays false in every
//! later round.

use crate::{Evaluator, ESCAPE_RADIUS_SQ};
use mandelbench_core::{imag_axis, real_axis, EvaluationConfig, ResultGrid};
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

/// Which count the batched evaluator stores for a cell that escapes.
///
/// Cells still active in the final round are presumed in the set and hold
/// `max_iterations` under either convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryConvention {
    /// Index of the last round in which the cell was still bounded.
    /// Escaping cells read one less than [`ScalarEvaluator`](crate::ScalarEvaluator).
    #[default]
    LastBounded,
    /// Number of steps taken before escaping. Identical to the scalar count.
    FirstEscaped,
}

impl BoundaryConvention {
    /// Count written for a cell active in round `round`.
    #[inline]
    fn recorded_count(self, round: u32, max_iterations: u32) -> u32 {
        let taken = round + 1;
        match self {
            Self::FirstEscaped => taken,
            Self::LastBounded if taken == max_iterations => max_iterations,
            Self::LastBounded => round,
        }
    }
}

/// Escape-time evaluator running synchronous masked rounds over dense arrays.
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchedEvaluator {
    convention: BoundaryConvention,
}

impl BatchedEvaluator {
    /// Evaluator using [`BoundaryConvention::LastBounded`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_convention(convention: BoundaryConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> BoundaryConvention {
        self.convention
    }
}

impl Evaluator for BatchedEvaluator {
    fn id(&self) -> &'static str {
        match self.convention {
            BoundaryConvention::LastBounded => "batched",
            BoundaryConvention::FirstEscaped => "batched-aligned",
        }
    }

    fn display_name(&self) -> &'static str {
        match self.convention {
            BoundaryConvention::LastBounded => "Batched (masked array rounds)",
            BoundaryConvention::FirstEscaped => "Batched (masked array rounds, aligned counts)",
        }
    }

    fn evaluate(&self, config: &EvaluationConfig) -> ResultGrid {
        let shape = (config.height(), config.width());
        let max_iterations = config.max_iterations();

        // Coordinate grids built from the shared axis mapping
        let re = real_axis(config.width(), config.region());
        let im = imag_axis(config.height(), config.region());
        let c_re = Array2::from_shape_fn(shape, |(_, x)| re[x]);
        let c_im = Array2::from_shape_fn(shape, |(y, _)| im[y]);

        let mut z_re = Array2::<f64>::zeros(shape);
        let mut z_im = Array2::<f64>::zeros(shape);
        let mut mask = Array2::from_elem(shape, false);
        let mut iterations = Array2::<u32>::zeros(shape);

        for round in 0..max_iterations {
            Zip::from(&mut mask)
                .and(&z_re)
                .and(&z_im)
                .for_each(|active, &zr, &zi| *active = zr * zr + zi * zi < ESCAPE_RADIUS_SQ);

            Zip::from(&mut z_re)
                .and(&mut z_im)
                .and(&c_re)
                .and(&c_im)
                .and(&mask)
                .for_each(|zr, zi, &cr, &ci, &active| {
                    if active {
                        let new_zr = *zr * *zr - *zi * *zi + cr;
                        *zi = 2.0 * *zr * *zi + ci;
                        *zr = new_zr;
                    }
                });

            let recorded = self.convention.recorded_count(round, max_iterations);
            Zip::from(&mut iterations)
                .and(&mask)
                .for_each(|n, &active| {
                    if active {
                        *n = recorded;
                    }
                });
        }

        log::debug!(
            "{}: {} rounds over {} cells",
            self.id(),
            max_iterations,
            config.cell_count()
        );

        // zeros() allocates in standard (row-major) layout
        ResultGrid::from_row_major(
            config.width(),
            config.height(),
            max_iterations,
            iterations.into_raw_vec(),
        )
    }
}

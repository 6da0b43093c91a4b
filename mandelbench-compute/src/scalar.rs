use crate::{Evaluator, ESCAPE_RADIUS_SQ};
use mandelbench_core::{map_pixel, EvaluationConfig, ResultGrid};

/// Escape-time evaluator that iterates one cell at a time.
///
/// Each cell runs its own loop and stops as soon as it escapes, so the work
/// per cell is proportional to its count rather than to the cap.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarEvaluator;

impl ScalarEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for ScalarEvaluator {
    fn id(&self) -> &'static str {
        "scalar"
    }

    fn display_name(&self) -> &'static str {
        "Scalar (per-cell loop)"
    }

    fn evaluate(&self, config: &EvaluationConfig) -> ResultGrid {
        let (width, height) = (config.width(), config.height());
        let region = config.region();
        let max_iterations = config.max_iterations();

        let iterations = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    let (cx, cy) = map_pixel(x, y, width, height, region);
                    escape_count(cx, cy, max_iterations)
                })
            })
            .collect();

        ResultGrid::from_row_major(width, height, max_iterations, iterations)
    }
}

/// Number of iterations of `z = z^2 + c` from `z = 0` before `|z|^2 >= 4`,
/// or `max_iterations` if the orbit stays bounded that long.
///
/// The magnitude check runs before each step, so `max_iterations == 0` gives
/// 0 and a value landing exactly on radius 2 stops without counting the next
/// step.
#[inline]
pub fn escape_count(cx: f64, cy: f64, max_iterations: u32) -> u32 {
    let mut zx = 0.0_f64;
    let mut zy = 0.0_f64;
    let mut n = 0;

    while n < max_iterations && zx * zx + zy * zy < ESCAPE_RADIUS_SQ {
        // z = z^2 + c
        let new_zx = zx * zx - zy * zy + cx;
        zy = 2.0 * zx * zy + cy;
        zx = new_zx;
        n += 1;
    }

    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandelbench_core::Region;

    fn config(width: usize, height: usize, max_iterations: u32) -> EvaluationConfig {
        let region = Region::new(-2.0, 1.0, -1.5, 1.5).unwrap();
        EvaluationConfig::new(width, height, region, max_iterations).unwrap()
    }

    #[test]
    fn evaluate_produces_correct_size() {
        let grid = ScalarEvaluator::new().evaluate(&config(100, 50, 20));
        assert_eq!(grid.shape(), (50, 100));
        assert_eq!(grid.as_slice().len(), 100 * 50);
        assert_eq!(grid.max_iterations(), 20);
    }

    #[test]
    fn origin_is_in_set() {
        assert_eq!(escape_count(0.0, 0.0, 100), 100);
    }

    #[test]
    fn minus_one_cycles_and_never_escapes() {
        // 0 -> -1 -> 0 -> -1 ...
        for max in [1, 2, 3, 50, 1000] {
            assert_eq!(escape_count(-1.0, 0.0, max), max);
        }
    }

    #[test]
    fn main_cardioid_point_in_set() {
        assert_eq!(escape_count(-0.5, 0.0, 500), 500);
    }

    #[test]
    fn far_point_escapes_after_first_step() {
        // z1 = c, |c|^2 = 8
        assert_eq!(escape_count(2.0, 2.0, 100), 1);
    }

    #[test]
    fn point_on_radius_two_stops_without_counting_next_step() {
        // z1 = -2 lands exactly on |z|^2 = 4 and is treated as escaped,
        // even though the orbit -2, 2, 2, ... is bounded
        assert_eq!(escape_count(-2.0, 0.0, 100), 1);
        // z1 = 2, |z1|^2 = 4: escaped after one step
        assert_eq!(escape_count(2.0, 0.0, 100), 1);
    }

    #[test]
    fn real_point_escape_sequence() {
        // c = 1: z = 0, 1, 2 (|z|^2 = 4, stop)
        assert_eq!(escape_count(1.0, 0.0, 100), 2);
        // c = 0.5: 0, 0.5, 0.75, 1.0625, 1.62890625, 3.15333... (> 2)
        assert_eq!(escape_count(0.5, 0.0, 100), 5);
    }

    #[test]
    fn zero_cap_returns_zero() {
        assert_eq!(escape_count(0.0, 0.0, 0), 0);
        assert_eq!(escape_count(5.0, 5.0, 0), 0);

        let grid = ScalarEvaluator::new().evaluate(&config(8, 8, 0));
        assert!(grid.as_slice().iter().all(|&n| n == 0));
    }

    #[test]
    fn counts_never_exceed_cap() {
        let grid = ScalarEvaluator::new().evaluate(&config(40, 30, 25));
        assert!(grid.as_slice().iter().all(|&n| n <= 25));
        assert!(grid.bounded_count() > 0);
        assert!(grid.escaped_count() > 0);
    }

    #[test]
    fn boundary_point_takes_many_iterations() {
        let n = escape_count(-0.75, 0.1, 1000);
        assert!(n > 10 && n < 1000, "got {n}");
    }
}

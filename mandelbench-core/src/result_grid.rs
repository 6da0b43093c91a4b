// mandelbench-core/src/result_grid.rs

use serde::Serialize;

/// Per-cell escape counts produced by one evaluator run.
///
/// Stored row-major: row `y` holds the cells with imaginary part
/// `map_pixel(_, y, ..).1`. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultGrid {
    width: usize,
    height: usize,
    /// Iteration cap used for this computation (for colormap normalization)
    max_iterations: u32,
    iterations: Vec<u32>,
}

impl ResultGrid {
    /// Wrap row-major counts.
    ///
    /// # Panics
    /// If `iterations.len() != width * height`.
    pub fn from_row_major(
        width: usize,
        height: usize,
        max_iterations: u32,
        iterations: Vec<u32>,
    ) -> Self {
        assert_eq!(
            iterations.len(),
            width * height,
            "ResultGrid needs exactly width * height cells"
        );
        Self {
            width,
            height,
            max_iterations,
            iterations,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, matching row-major array shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Count at pixel `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.iterations[y * self.width + x])
        } else {
            None
        }
    }

    /// All counts in row-major order.
    pub fn as_slice(&self) -> &[u32] {
        &self.iterations
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact(0) panics; a grid with zero width has no rows either way
        self.iterations.chunks_exact(self.width.max(1))
    }

    /// Cells that reached the cap (presumed in the set).
    pub fn bounded_count(&self) -> usize {
        self.iterations
            .iter()
            .filter(|&&n| n == self.max_iterations)
            .count()
    }

    /// Cells that escaped before the cap.
    pub fn escaped_count(&self) -> usize {
        self.iterations.len() - self.bounded_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultGrid {
        // 3 wide, 2 tall
        ResultGrid::from_row_major(3, 2, 10, vec![0, 1, 10, 3, 10, 5])
    }

    #[test]
    fn shape_is_height_by_width() {
        let grid = sample();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn get_indexes_row_major() {
        let grid = sample();
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(2, 0), Some(10));
        assert_eq!(grid.get(0, 1), Some(3));
        assert_eq!(grid.get(2, 1), Some(5));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn rows_split_at_width() {
        let grid = sample();
        let rows: Vec<&[u32]> = grid.rows().collect();
        assert_eq!(rows, vec![&[0, 1, 10][..], &[3, 10, 5][..]]);
    }

    #[test]
    fn counts_bounded_and_escaped_cells() {
        let grid = sample();
        assert_eq!(grid.bounded_count(), 2);
        assert_eq!(grid.escaped_count(), 4);
    }

    #[test]
    #[should_panic(expected = "width * height")]
    fn rejects_wrong_cell_count() {
        ResultGrid::from_row_major(3, 3, 10, vec![0; 8]);
    }

    #[test]
    fn serializes_dimensions_and_counts() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 2);
        assert_eq!(json["max_iterations"], 10);
        assert_eq!(json["iterations"].as_array().unwrap().len(), 6);
    }
}

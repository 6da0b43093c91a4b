//! Pixel to complex-plane mapping shared by every evaluator.
//!
//! The mapping is half-open: pixel `x` in `[0, width)` lands at
//! `re_min + x * (re_max - re_min) / width`, so the right and bottom edges of
//! the region are never sampled. Both evaluators go through [`map_pixel`] or
//! the axis helpers built on it, which keeps their seeds bit-identical.

use crate::Region;

/// Complex seed `c` for pixel `(x, y)` as `(re, im)`.
#[inline]
pub fn map_pixel(x: usize, y: usize, width: usize, height: usize, region: &Region) -> (f64, f64) {
    (
        map_axis(x, width, region.re_min(), region.re_max()),
        map_axis(y, height, region.im_min(), region.im_max()),
    )
}

/// One coordinate of the mapping. Operation order is fixed so that callers
/// building whole axes get exactly the values `map_pixel` returns.
#[inline]
fn map_axis(index: usize, count: usize, min: f64, max: f64) -> f64 {
    min + index as f64 * (max - min) / count as f64
}

/// Real parts of every column, left to right.
pub fn real_axis(width: usize, region: &Region) -> Vec<f64> {
    (0..width)
        .map(|x| map_axis(x, width, region.re_min(), region.re_max()))
        .collect()
}

/// Imaginary parts of every row, top to bottom.
pub fn imag_axis(height: usize, region: &Region) -> Vec<f64> {
    (0..height)
        .map(|y| map_axis(y, height, region.im_min(), region.im_max()))
        .collect()
}

/// Distance between neighbouring samples as `(re_step, im_step)`.
pub fn pixel_step(width: usize, height: usize, region: &Region) -> (f64, f64) {
    (
        region.re_span() / width as f64,
        region.im_span() / height as f64,
    )
}

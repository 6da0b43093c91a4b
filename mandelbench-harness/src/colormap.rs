//! Iteration-count to color mapping and PNG output.

use crate::HarnessError;
use image::{Rgb, RgbImage};
use mandelbench_core::ResultGrid;
use serde::Serialize;
use std::path::Path;

const LUT_SIZE: usize = 256;

/// A piecewise-linear channel: `(position, value)` knots sorted by position.
type Channel = &'static [(f64, f64)];

/// Black through red and yellow to white (matplotlib's "hot").
const HOT: [Channel; 3] = [
    &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
    &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
    &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
];

const GRAYSCALE: [Channel; 3] = [
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
];

/// Built-in colormaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Hot,
    Grayscale,
}

impl Colormap {
    fn channels(self) -> &'static [Channel; 3] {
        match self {
            Self::Hot => &HOT,
            Self::Grayscale => &GRAYSCALE,
        }
    }

    /// Color for normalized `t`, clamped to `[0, 1]`.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.channels().map(|channel| to_byte(interpolate(channel, t)))
    }

    /// Generate a 256-entry lookup table.
    pub fn to_lut(self) -> Vec<[u8; 3]> {
        (0..LUT_SIZE)
            .map(|i| self.sample(i as f64 / (LUT_SIZE - 1) as f64))
            .collect()
    }
}

fn interpolate(knots: Channel, t: f64) -> f64 {
    for pair in knots.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return y1;
            }
            return y0 + (y1 - y0) * (t - x0) / span;
        }
    }
    knots.last().map_or(0.0, |&(_, y)| y)
}

fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Render a grid to an RGB image, one pixel per cell.
///
/// Counts are normalized by the grid's cap, so bounded cells take the top
/// of the colormap. Grid row `y` becomes image row `y`.
pub fn render(grid: &ResultGrid, colormap: Colormap) -> RgbImage {
    let lut = colormap.to_lut();
    let max = grid.max_iterations();
    let width = u32::try_from(grid.width()).unwrap_or(u32::MAX);
    let height = u32::try_from(grid.height()).unwrap_or(u32::MAX);

    RgbImage::from_fn(width, height, |x, y| {
        let n = grid.get(x as usize, y as usize).unwrap_or(0);
        let index = if max == 0 {
            0
        } else {
            (n as u64 * (LUT_SIZE as u64 - 1) / max as u64) as usize
        };
        Rgb(lut[index.min(LUT_SIZE - 1)])
    })
}

/// Render `grid` and write it as a PNG.
pub fn save_png(grid: &ResultGrid, colormap: Colormap, path: &Path) -> Result<(), HarnessError> {
    render(grid, colormap).save(path)?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

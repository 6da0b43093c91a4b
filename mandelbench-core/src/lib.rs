pub mod config;
pub mod error;
pub mod grid;
pub mod region;
pub mod result_grid;

pub use config::{EvaluationConfig, EvaluationParams, DEFAULT_PARAMS};
pub use error::{ConfigError, ValidationError};
pub use grid::{imag_axis, map_pixel, pixel_step, real_axis};
pub use region::Region;
pub use result_grid::ResultGrid;

//! Benchmark harness around the mandelbench evaluators: resource sampling,
//! colormap rendering, markdown reports and run orchestration.

pub mod colormap;
pub mod error;
pub mod metrics;
pub mod report;
pub mod run;

pub use colormap::{render, save_png, Colormap};
pub use error::HarnessError;
pub use metrics::{measure, Measured, ResourceSample, RunMetrics};
pub use report::{CandidateComparison, ComparisonReport};
pub use run::{
    image_file_name, run_comparison, ComparisonOutcome, RunOptions, RunRecord, METRICS_FILE,
    REPORT_FILE,
};

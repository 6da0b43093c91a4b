//! Run several evaluators on one configuration and write the results.

use crate::report::{CandidateComparison, ComparisonReport};
use crate::{colormap, measure, Colormap, HarnessError, RunMetrics};
use mandelbench_compute::{compare, create_evaluator};
use mandelbench_core::{EvaluationConfig, ResultGrid};
use std::fs;
use std::path::{Path, PathBuf};

pub const METRICS_FILE: &str = "metrics.json";
pub const REPORT_FILE: &str = "analysis.md";

/// Image file name for an evaluator's grid.
pub fn image_file_name(evaluator_id: &str) -> String {
    format!("mandelbrot_{evaluator_id}.png")
}

/// What to run and where to write it.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub output_dir: PathBuf,
    /// Evaluator IDs in run order; the first one is the comparison reference
    pub evaluators: Vec<String>,
    pub colormap: Colormap,
    pub write_images: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("results"),
            evaluators: vec!["scalar".to_string(), "batched".to_string()],
            colormap: Colormap::Hot,
            write_images: true,
        }
    }
}

/// One evaluator's grid and metrics.
#[derive(Clone, Debug)]
pub struct RunRecord {
    pub metrics: RunMetrics,
    pub grid: ResultGrid,
}

/// Everything produced by [`run_comparison`].
#[derive(Clone, Debug)]
pub struct ComparisonOutcome {
    pub runs: Vec<RunRecord>,
    pub report: ComparisonReport,
    pub report_path: PathBuf,
    pub metrics_path: PathBuf,
}

/// Evaluate `config` with every requested evaluator, compare each grid with
/// the first one, and write images, `metrics.json` and `analysis.md` into
/// the output directory.
pub fn run_comparison(
    config: &EvaluationConfig,
    options: &RunOptions,
) -> Result<ComparisonOutcome, HarnessError> {
    if options.evaluators.is_empty() {
        return Err(HarnessError::NoEvaluators);
    }

    // Resolve every ID before spending time on any evaluation
    let evaluators = options
        .evaluators
        .iter()
        .map(|id| create_evaluator(id).ok_or_else(|| HarnessError::UnknownEvaluator(id.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    let out_dir = &options.output_dir;
    fs::create_dir_all(out_dir).map_err(|e| HarnessError::io(out_dir, e))?;

    let mut runs = Vec::with_capacity(evaluators.len());
    for evaluator in &evaluators {
        log::info!(
            "Running {} on {}x{} (max {} iterations)",
            evaluator.id(),
            config.width(),
            config.height(),
            config.max_iterations()
        );

        let measured = measure(|| evaluator.evaluate_timed(config));
        let evaluation = measured.value;

        let metrics = RunMetrics {
            evaluator: evaluator.id().to_string(),
            display_name: evaluator.display_name().to_string(),
            elapsed_ms: evaluation.elapsed_ms(),
            cpu_percent: measured.cpu_percent,
            peak_memory_mib: measured.peak_memory_mib,
            memory_delta_mib: measured.memory_delta_mib,
            escaped_cells: evaluation.grid.escaped_count(),
            bounded_cells: evaluation.grid.bounded_count(),
        };

        log::info!(
            "{}: {:.2} ms, {} escaped, {} bounded",
            metrics.evaluator,
            metrics.elapsed_ms,
            metrics.escaped_cells,
            metrics.bounded_cells
        );

        runs.push(RunRecord {
            metrics,
            grid: evaluation.grid,
        });
    }

    let comparisons = compare_with_reference(&runs)?;

    let mut images = Vec::new();
    if options.write_images {
        for run in &runs {
            let file = image_file_name(&run.metrics.evaluator);
            colormap::save_png(&run.grid, options.colormap, &out_dir.join(&file))?;
            images.push((run.metrics.evaluator.clone(), file));
        }
    }

    let report = ComparisonReport {
        config: *config,
        runs: runs.iter().map(|r| r.metrics.clone()).collect(),
        comparisons,
        images,
    };

    let metrics_path = out_dir.join(METRICS_FILE);
    let json = serde_json::to_string_pretty(&report)?;
    write_file(&metrics_path, &json)?;

    let report_path = out_dir.join(REPORT_FILE);
    write_file(&report_path, &report.render_markdown())?;

    log::info!("Wrote report to {}", report_path.display());

    Ok(ComparisonOutcome {
        runs,
        report,
        report_path,
        metrics_path,
    })
}

fn compare_with_reference(runs: &[RunRecord]) -> Result<Vec<CandidateComparison>, HarnessError> {
    let Some((reference, candidates)) = runs.split_first() else {
        return Ok(Vec::new());
    };

    candidates
        .iter()
        .map(|candidate| -> Result<CandidateComparison, HarnessError> {
            let summary = compare(&reference.grid, &candidate.grid)?;
            if !summary.within_tolerance() {
                log::warn!(
                    "{} differs from {} by more than one iteration at {} cells",
                    candidate.metrics.evaluator,
                    reference.metrics.evaluator,
                    summary.mismatched
                );
            }
            Ok(CandidateComparison {
                reference: reference.metrics.evaluator.clone(),
                candidate: candidate.metrics.evaluator.clone(),
                summary,
            })
        })
        .collect()
}

fn write_file(path: &Path, contents: &str) -> Result<(), HarnessError> {
    fs::write(path, contents).map_err(|e| HarnessError::io(path, e))
}

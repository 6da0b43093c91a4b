//! # mandelbench
//!
//! Computes the Mandelbrot set with the scalar and batched evaluators, then
//! writes one image per evaluator, `metrics.json` and `analysis.md`.
//!
//! ## Usage
//!
//! ```text
//! mandelbench --width 800 --height 800 --max-iterations 500 --output results
//! mandelbench --config params.json --aligned --colormap grayscale
//! ```
//!
//! Logging defaults to `info`; set `RUST_LOG=debug` for per-evaluator timings.

use anyhow::{Context, Result};
use clap::Parser;
use mandelbench_core::{EvaluationParams, DEFAULT_PARAMS};
use mandelbench_harness::{run_comparison, Colormap, RunOptions};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mandelbench", about = "Compare Mandelbrot evaluation strategies")]
struct Cli {
    /// JSON file with evaluation parameters; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    re_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    re_max: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    im_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    im_max: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    max_iterations: Option<i64>,

    /// Output directory for images and reports
    #[arg(long, default_value = "results")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = Colormap::Hot)]
    colormap: Colormap,

    /// Record first-escape counts in the batched evaluator so it matches the scalar one exactly
    #[arg(long)]
    aligned: bool,

    /// Skip PNG output
    #[arg(long)]
    no_images: bool,
}

impl Cli {
    fn params(&self) -> Result<EvaluationParams> {
        let base = match &self.config {
            Some(path) => EvaluationParams::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => DEFAULT_PARAMS,
        };

        Ok(EvaluationParams {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            re_min: self.re_min.unwrap_or(base.re_min),
            re_max: self.re_max.unwrap_or(base.re_max),
            im_min: self.im_min.unwrap_or(base.im_min),
            im_max: self.im_max.unwrap_or(base.im_max),
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
        })
    }

    fn run_options(&self) -> RunOptions {
        let batched = if self.aligned {
            "batched-aligned"
        } else {
            "batched"
        };
        RunOptions {
            output_dir: self.output.clone(),
            evaluators: vec!["scalar".to_string(), batched.to_string()],
            colormap: self.colormap,
            write_images: !self.no_images,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli
        .params()?
        .validate()
        .context("invalid evaluation parameters")?;

    let outcome = run_comparison(&config, &cli.run_options())
        .with_context(|| format!("writing results to {}", cli.output.display()))?;

    for run in &outcome.runs {
        println!(
            "{:<16} {:>10.2} ms  peak {:>8} MiB  cpu {:>6} %",
            run.metrics.evaluator,
            run.metrics.elapsed_ms,
            run.metrics
                .peak_memory_mib
                .map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}")),
            run.metrics
                .cpu_percent
                .map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}")),
        );
    }
    println!("Report: {}", outcome.report_path.display());

    Ok(())
}

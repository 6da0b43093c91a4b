//! Markdown report comparing evaluator runs.

use crate::RunMetrics;
use mandelbench_compute::GridComparison;
use mandelbench_core::{pixel_step, EvaluationConfig};
use serde::Serialize;
use std::fmt::Write;

/// Agreement of one candidate grid against the reference run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidateComparison {
    pub reference: String,
    pub candidate: String,
    pub summary: GridComparison,
}

/// Everything the report renders.
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonReport {
    pub config: EvaluationConfig,
    pub runs: Vec<RunMetrics>,
    pub comparisons: Vec<CandidateComparison>,
    /// `(evaluator id, image file name)` for each rendered grid
    pub images: Vec<(String, String)>,
}

impl ComparisonReport {
    /// Ratio of the reference run's time to `run`'s time (> 1 means faster).
    pub fn speedup(&self, run: &RunMetrics) -> Option<f64> {
        let reference = self.runs.first()?;
        (run.elapsed_ms > 0.0).then(|| reference.elapsed_ms / run.elapsed_ms)
    }

    pub fn fastest(&self) -> Option<&RunMetrics> {
        self.runs
            .iter()
            .min_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }

    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        // fmt::Write into a String cannot fail
        let _ = self.write_markdown(&mut out);
        out
    }

    fn write_markdown(&self, out: &mut String) -> std::fmt::Result {
        let cfg = &self.config;
        let (re_min, re_max, im_min, im_max) = cfg.region().extent();
        let (re_step, im_step) = pixel_step(cfg.width(), cfg.height(), cfg.region());

        writeln!(out, "# Mandelbrot Set Evaluation Results\n")?;

        writeln!(out, "## Setup\n")?;
        writeln!(
            out,
            "- Grid: {} x {} ({} cells)",
            cfg.width(),
            cfg.height(),
            cfg.cell_count()
        )?;
        writeln!(
            out,
            "- Region: Re [{re_min}, {re_max}), Im [{im_min}, {im_max})"
        )?;
        writeln!(out, "- Pixel step: {re_step} (Re), {im_step} (Im)")?;
        writeln!(out, "- Iteration cap: {}\n", cfg.max_iterations())?;

        writeln!(out, "## Methods\n")?;
        for run in &self.runs {
            writeln!(out, "- **{}** (`{}`)", run.display_name, run.evaluator)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "The scalar evaluator iterates each cell in its own loop and stops at escape. \
             The batched evaluator advances every cell together for the full iteration cap, \
             freezing cells once |z| reaches 2.\n"
        )?;

        writeln!(out, "## Metrics\n")?;
        writeln!(
            out,
            "| Evaluator | Time (ms) | Speed-up | Peak memory (MiB) | Memory growth (MiB) | CPU (%) |"
        )?;
        writeln!(out, "|---|---:|---:|---:|---:|---:|")?;
        for run in &self.runs {
            writeln!(
                out,
                "| {} | {:.2} | {} | {} | {} | {} |",
                run.evaluator,
                run.elapsed_ms,
                fmt_ratio(self.speedup(run)),
                fmt_opt(run.peak_memory_mib),
                fmt_opt(run.memory_delta_mib),
                fmt_opt(run.cpu_percent),
            )?;
        }
        writeln!(out)?;

        if !self.comparisons.is_empty() {
            writeln!(out, "## Agreement\n")?;
            for cmp in &self.comparisons {
                let s = &cmp.summary;
                writeln!(out, "### {} vs {}\n", cmp.candidate, cmp.reference)?;
                writeln!(out, "- Equal cells: {} of {}", s.equal, s.cells)?;
                writeln!(out, "- One below reference: {}", s.one_below)?;
                writeln!(out, "- Mismatched: {}", s.mismatched)?;
                writeln!(
                    out,
                    "- Bounded cells agreeing: {} of {}\n",
                    s.bounded_agreeing, s.bounded_total
                )?;
            }
        }

        if !self.images.is_empty() {
            writeln!(out, "## Images\n")?;
            for (id, file) in &self.images {
                writeln!(out, "![{id}]({file})")?;
            }
            writeln!(out)?;
        }

        writeln!(out, "## Summary\n")?;
        if let Some(fastest) = self.fastest() {
            writeln!(
                out,
                "`{}` was the fastest at {:.2} ms.",
                fastest.evaluator, fastest.elapsed_ms
            )?;
        }
        let all_within = self.comparisons.iter().all(|c| c.summary.within_tolerance());
        if all_within {
            writeln!(
                out,
                "All grids agree with the reference within one iteration at escaping cells."
            )?;
        } else {
            writeln!(
                out,
                "Some grids differ from the reference by more than one iteration."
            )?;
        }

        Ok(())
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

fn fmt_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}x"))
}

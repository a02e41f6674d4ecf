// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The pipeline talks to two external capabilities:
//
//   DetectionBackend - trains, validates and runs a detector
//                      (implemented by ml::ultralytics::UltralyticsCli)
//
//   ChartRenderer    - turns a ChartSpec into a file on disk
//                      and optionally shows it
//                      (implemented by infra::charts::SvgChartRenderer)
//
// The application layer only sees these traits, so tests can
// swap in recording fakes without YOLO or a display.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::{Path, PathBuf};

use crate::domain::{
    chart::ChartSpec,
    config::PipelineConfig,
    error::PipelineError,
    metrics::ValidationMetrics,
};

// ─── DetectionBackend ─────────────────────────────────────────────────────────
/// An object-detection library that owns the model, its
/// training loop, metric computation and prediction.
pub trait DetectionBackend {
    /// Train from `config.model` on `config.data`, writing the run
    /// (weights + results.csv) under `config.run_dir()`.
    fn train(&self, config: &PipelineConfig) -> Result<(), PipelineError>;

    /// Validate the given weights and return the summary metrics.
    fn validate(
        &self,
        weights: &Path,
        config:  &PipelineConfig,
    ) -> Result<ValidationMetrics, PipelineError>;

    /// Run prediction on `source`, displaying results when `config.show` is set.
    fn predict(
        &self,
        weights: &Path,
        source:  &str,
        config:  &PipelineConfig,
    ) -> Result<(), PipelineError>;
}

// ─── ChartRenderer ────────────────────────────────────────────────────────────
/// Anything that can draw a line chart to `path`.
pub trait ChartRenderer {
    /// Render `chart` and return the path that was written.
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<PathBuf, PipelineError>;
}

// ============================================================
// Layer 2 - EvaluateUseCase
// ============================================================
// Validates the best checkpoint of the configured run and
// returns the library's summary metrics. Printing is left to
// Layer 1.

use crate::domain::{
    config::PipelineConfig,
    error::PipelineError,
    metrics::ValidationMetrics,
    traits::DetectionBackend,
};
use crate::infra::run_layout::RunLayout;

pub struct EvaluateUseCase<'a> {
    config:  &'a PipelineConfig,
    backend: &'a dyn DetectionBackend,
}

impl<'a> EvaluateUseCase<'a> {
    pub fn new(config: &'a PipelineConfig, backend: &'a dyn DetectionBackend) -> Self {
        Self { config, backend }
    }

    pub fn execute(&self) -> Result<ValidationMetrics, PipelineError> {
        let weights = RunLayout::from_config(self.config).require_best_weights()?;
        tracing::info!("Validating '{}'", weights.display());

        let metrics = self.backend.validate(&weights, self.config)?;
        tracing::debug!("Validation metrics: {:?}", metrics);
        Ok(metrics)
    }
}

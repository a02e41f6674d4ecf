// ============================================================
// Layer 2 - TrainUseCase
// ============================================================
// Hands the configured hyperparameters to the detection
// library and waits for it to finish:
//
//   Step 1: Log the effective configuration
//   Step 2: Run the library's training routine   (Layer 5 - ml)
//   Step 3: Locate the best checkpoint it wrote  (Layer 6 - infra)
//
// No inputs are validated up front. A missing dataset
// descriptor or an unusable device is reported by the
// library itself and surfaces as ExternalLibraryFailure.

use std::path::PathBuf;

use crate::domain::{config::PipelineConfig, error::PipelineError, traits::DetectionBackend};
use crate::infra::run_layout::RunLayout;

pub struct TrainUseCase<'a> {
    config:  &'a PipelineConfig,
    backend: &'a dyn DetectionBackend,
}

impl<'a> TrainUseCase<'a> {
    pub fn new(config: &'a PipelineConfig, backend: &'a dyn DetectionBackend) -> Self {
        Self { config, backend }
    }

    /// Train, then return the path of `weights/best.*` if the library produced one.
    pub fn execute(&self) -> Result<Option<PathBuf>, PipelineError> {
        let cfg = self.config;

        tracing::info!(
            "Training '{}' on '{}' for {} epochs (imgsz={}, batch={}, device={})",
            cfg.model,
            cfg.data.display(),
            cfg.epochs,
            cfg.image_size,
            cfg.batch_size,
            cfg.device,
        );
        if let Ok(json) = serde_json::to_string(cfg) {
            tracing::debug!("Effective config: {json}");
        }

        self.backend.train(cfg)?;

        let layout = RunLayout::from_config(cfg);
        let best   = layout.best_weights();
        match &best {
            Some(p) => tracing::info!("Best weights at '{}'", p.display()),
            None    => tracing::warn!(
                "Training finished but no best.* found under '{}'",
                layout.weights_dir().display()
            ),
        }
        Ok(best)
    }
}

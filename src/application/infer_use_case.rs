// ============================================================
// Layer 2 - InferUseCase
// ============================================================
// Runs the trained detector on a user-supplied source:
//
//   Step 1: Locate weights/best.*      → ArtifactNotFound
//   Step 2: Sanity-check the source    → InvalidSource
//   Step 3: Delegate to the library's prediction routine
//
// The artifact is checked before the source so a fresh
// checkout reports "train first" rather than a path problem.

use std::path::Path;

use crate::domain::{config::PipelineConfig, error::PipelineError, traits::DetectionBackend};
use crate::infra::run_layout::RunLayout;

pub struct InferUseCase<'a> {
    config:  &'a PipelineConfig,
    backend: &'a dyn DetectionBackend,
}

impl<'a> InferUseCase<'a> {
    pub fn new(config: &'a PipelineConfig, backend: &'a dyn DetectionBackend) -> Self {
        Self { config, backend }
    }

    pub fn execute(&self, source: &str) -> Result<(), PipelineError> {
        let weights = RunLayout::from_config(self.config).require_best_weights()?;
        let source  = check_source(source)?;

        tracing::info!("Predicting on '{}' with '{}'", source, weights.display());
        self.backend.predict(&weights, source, self.config)
    }
}

/// Accepts existing local paths, URLs, camera indices and glob
/// patterns; anything else is an InvalidSource.
///
/// A path that exists exactly as typed is kept verbatim, spaces
/// included. Otherwise surrounding whitespace is dropped first.
fn check_source(source: &str) -> Result<&str, PipelineError> {
    if !source.trim().is_empty() && Path::new(source).exists() {
        return Ok(source);
    }
    let source = source.trim();

    let passthrough = source.contains("://")
        || source.contains('*')
        || (!source.is_empty() && source.chars().all(|c| c.is_ascii_digit()));

    if passthrough || (!source.is_empty() && Path::new(source).exists()) {
        Ok(source)
    } else {
        Err(PipelineError::InvalidSource(source.to_string()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{seed_weights, test_config, BackendCall, RecordingBackend};
    use std::fs;

    #[test]
    fn test_missing_artifact_wins_over_missing_source() {
        let tmp     = tempfile::tempdir().unwrap();
        let cfg     = test_config(tmp.path());
        let backend = RecordingBackend::default();

        let err = InferUseCase::new(&cfg, &backend).execute("missing.jpg").unwrap_err();
        assert!(matches!(err, PipelineError::ArtifactNotFound(_)));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_missing_source_is_invalid() {
        let tmp     = tempfile::tempdir().unwrap();
        let cfg     = test_config(tmp.path());
        seed_weights(&cfg);
        let backend = RecordingBackend::default();

        let missing = tmp.path().join("missing.jpg");
        let err = InferUseCase::new(&cfg, &backend)
            .execute(missing.to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidSource(_)));

        let err = InferUseCase::new(&cfg, &backend).execute("   ").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidSource(_)));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_existing_source_is_predicted() {
        let tmp     = tempfile::tempdir().unwrap();
        let cfg     = test_config(tmp.path());
        let weights = seed_weights(&cfg);
        let image   = tmp.path().join("field.jpg");
        fs::write(&image, b"jpeg").unwrap();
        let backend = RecordingBackend::default();

        let src = image.to_str().unwrap().to_string();
        InferUseCase::new(&cfg, &backend).execute(&format!("{src}\n")).unwrap();

        assert_eq!(backend.calls(), vec![BackendCall::Predict(weights, src)]);
    }

    #[test]
    fn test_remote_and_camera_sources_pass_through() {
        assert_eq!(check_source("0").unwrap(), "0");
        assert_eq!(
            check_source("https://example.com/field.mp4").unwrap(),
            "https://example.com/field.mp4"
        );
        assert_eq!(check_source("images/*.jpg").unwrap(), "images/*.jpg");
    }

    #[test]
    fn test_padded_file_name_is_kept_verbatim() {
        let tmp    = tempfile::tempdir().unwrap();
        let padded = tmp.path().join(" field.jpg ");
        fs::write(&padded, b"jpeg").unwrap();

        let src = padded.to_str().unwrap();
        assert_eq!(check_source(src).unwrap(), src);
    }
}

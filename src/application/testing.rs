// Test doubles for the Layer 3 traits.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use crate::domain::{
    chart::ChartSpec,
    config::{Device, PipelineConfig},
    error::PipelineError,
    metrics::ValidationMetrics,
    traits::{ChartRenderer, DetectionBackend},
};

/// Config rooted in a temp dir, CPU only, nothing shown
pub fn test_config(root: &Path) -> PipelineConfig {
    PipelineConfig {
        project_root: root.join("runs"),
        run_name:     "test_run".to_string(),
        device:       Device::Cpu,
        show:         false,
        ..PipelineConfig::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Train(String),
    Validate(PathBuf),
    Predict(PathBuf, String),
}

/// Records every call; optionally writes weights on train or fails.
#[derive(Default)]
pub struct RecordingBackend {
    calls:         RefCell<Vec<BackendCall>>,
    write_weights: bool,
    fail:          bool,
    metrics:       Option<ValidationMetrics>,
}

impl RecordingBackend {
    pub fn writing_weights(mut self) -> Self {
        self.write_weights = true;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn returning(mut self, metrics: ValidationMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    fn failure(action: &'static str) -> PipelineError {
        PipelineError::ExternalLibraryFailure {
            action,
            status: "exit status: 1".to_string(),
        }
    }
}

impl DetectionBackend for RecordingBackend {
    fn train(&self, config: &PipelineConfig) -> Result<(), PipelineError> {
        self.calls.borrow_mut().push(BackendCall::Train(config.run_name.clone()));
        if self.fail {
            return Err(Self::failure("training"));
        }
        if self.write_weights {
            let weights = config.run_dir().join("weights");
            fs::create_dir_all(&weights)?;
            fs::write(weights.join("best.pt"), b"weights")?;
        }
        Ok(())
    }

    fn validate(
        &self,
        weights: &Path,
        _config: &PipelineConfig,
    ) -> Result<ValidationMetrics, PipelineError> {
        self.calls.borrow_mut().push(BackendCall::Validate(weights.to_path_buf()));
        if self.fail {
            return Err(Self::failure("validation"));
        }
        self.metrics.ok_or(PipelineError::MetricsUnavailable)
    }

    fn predict(
        &self,
        weights: &Path,
        source:  &str,
        _config: &PipelineConfig,
    ) -> Result<(), PipelineError> {
        self.calls
            .borrow_mut()
            .push(BackendCall::Predict(weights.to_path_buf(), source.to_string()));
        if self.fail {
            return Err(Self::failure("inference"));
        }
        Ok(())
    }
}

/// Keeps every chart it is asked to render; writes nothing.
#[derive(Default)]
pub struct RecordingRenderer {
    rendered: RefCell<Vec<(ChartSpec, PathBuf)>>,
}

impl RecordingRenderer {
    pub fn rendered(&self) -> Vec<(ChartSpec, PathBuf)> {
        self.rendered.borrow().clone()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<PathBuf, PipelineError> {
        self.rendered
            .borrow_mut()
            .push((chart.clone(), path.to_path_buf()));
        Ok(path.to_path_buf())
    }
}

/// Write `weights/best.pt` for the configured run
pub fn seed_weights(config: &PipelineConfig) -> PathBuf {
    let weights = config.run_dir().join("weights");
    fs::create_dir_all(&weights).unwrap();
    let best = weights.join("best.pt");
    fs::write(&best, b"weights").unwrap();
    best
}

/// Write `results.csv` for epochs 1–3 of a short run
pub fn seed_results(config: &PipelineConfig) -> PathBuf {
    let dir = config.run_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("results.csv");
    fs::write(
        &path,
        "epoch,train/box_loss,val/box_loss,metrics/precision(B),metrics/recall(B),metrics/mAP50(B),metrics/mAP50-95(B)\n\
         1,0.9,1.0,0.5,0.4,0.3,0.2\n\
         2,0.7,0.8,0.6,0.5,0.4,0.25\n\
         3,0.5,0.6,0.7,0.6,0.5,0.3\n",
    )
    .unwrap();
    path
}

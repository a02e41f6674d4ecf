// ============================================================
// Layer 5 - Ultralytics YOLO Backend
// ============================================================
// Drives the detection library through its `yolo` command
// line. Every call is `yolo detect <mode> key=value ...`:
//
//   train    → yolo detect train data=weed.yaml model=yolov9c.pt epochs=50
//                imgsz=640 batch=16 device=0 project=runs
//                name=Automatic_Weed_Remover exist_ok=True
//   val      → yolo detect val model=<best.pt> data=weed.yaml device=0
//   predict  → yolo detect predict model=<best.pt> source=<src> show=True
//
// train and predict inherit our stdio so the library's own
// progress bars and windows reach the user directly. val is
// captured so the summary row can be parsed.
//
// Reference: Ultralytics CLI docs (https://docs.ultralytics.com/usage/cli/)

use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Output, Stdio},
};

use crate::domain::{
    config::PipelineConfig,
    error::PipelineError,
    metrics::ValidationMetrics,
    traits::DetectionBackend,
};
use crate::ml::val_summary::parse_val_summary;

/// A fully built backend invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCommand {
    pub program: PathBuf,
    pub args:    Vec<String>,
}

impl BackendCommand {
    fn new(program: &Path, mode: &str) -> Self {
        Self {
            program: program.to_path_buf(),
            args:    vec!["detect".to_string(), mode.to_string()],
        }
    }

    fn kv(mut self, key: &str, value: impl std::fmt::Display) -> Self {
        self.args.push(format!("{key}={value}"));
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Python-style booleans, as the library's CLI parser expects
fn py_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

pub struct UltralyticsCli {
    program: PathBuf,
}

impl UltralyticsCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.backend.clone())
    }

    pub fn train_command(&self, cfg: &PipelineConfig) -> BackendCommand {
        BackendCommand::new(&self.program, "train")
            .kv("data",     cfg.data.display())
            .kv("model",    &cfg.model)
            .kv("epochs",   cfg.epochs)
            .kv("imgsz",    cfg.image_size)
            .kv("batch",    cfg.batch_size)
            .kv("device",   &cfg.device)
            .kv("project",  cfg.project_root.display())
            .kv("name",     &cfg.run_name)
            .kv("exist_ok", py_bool(true))
    }

    pub fn val_command(&self, weights: &Path, cfg: &PipelineConfig) -> BackendCommand {
        BackendCommand::new(&self.program, "val")
            .kv("model",  weights.display())
            .kv("data",   cfg.data.display())
            .kv("device", &cfg.device)
    }

    pub fn predict_command(&self, weights: &Path, source: &str, cfg: &PipelineConfig) -> BackendCommand {
        BackendCommand::new(&self.program, "predict")
            .kv("model",  weights.display())
            .kv("source", source)
            .kv("show",   py_bool(cfg.show))
    }

    fn launch_error(&self, source: io::Error) -> PipelineError {
        PipelineError::BackendUnavailable {
            program: self.program.clone(),
            source,
        }
    }

    /// Run with inherited stdio and wait for completion.
    fn run_attached(&self, cmd: &BackendCommand, action: &'static str) -> Result<(), PipelineError> {
        tracing::debug!("Running {} {}", cmd.program.display(), cmd.args.join(" "));
        let status = cmd.to_command().status().map_err(|e| self.launch_error(e))?;
        check_status(status, action)
    }

    /// Run with captured output and wait for completion.
    fn run_captured(&self, cmd: &BackendCommand, action: &'static str) -> Result<Output, PipelineError> {
        tracing::debug!("Running {} {}", cmd.program.display(), cmd.args.join(" "));
        let output = cmd
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.launch_error(e))?;
        check_status(output.status, action)?;
        Ok(output)
    }
}

fn check_status(status: ExitStatus, action: &'static str) -> Result<(), PipelineError> {
    if status.success() {
        Ok(())
    } else {
        Err(PipelineError::ExternalLibraryFailure {
            action,
            status: status.to_string(),
        })
    }
}

impl DetectionBackend for UltralyticsCli {
    fn train(&self, config: &PipelineConfig) -> Result<(), PipelineError> {
        let cmd = self.train_command(config);
        self.run_attached(&cmd, "training")
    }

    fn validate(
        &self,
        weights: &Path,
        config:  &PipelineConfig,
    ) -> Result<ValidationMetrics, PipelineError> {
        let cmd    = self.val_command(weights, config);
        let output = self.run_captured(&cmd, "validation")?;

        // The library logs its tables to stderr on some versions and
        // stdout on others, so search both.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stdout.lines().chain(stderr.lines()) {
            tracing::debug!(target: "weed_remover::yolo", "{line}");
        }

        parse_val_summary(&stdout)
            .or_else(|| parse_val_summary(&stderr))
            .ok_or(PipelineError::MetricsUnavailable)
    }

    fn predict(
        &self,
        weights: &Path,
        source:  &str,
        config:  &PipelineConfig,
    ) -> Result<(), PipelineError> {
        let cmd = self.predict_command(weights, source, config);
        self.run_attached(&cmd, "inference")
    }
}

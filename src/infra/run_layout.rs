// ============================================================
// Layer 6 - Run Layout
// ============================================================
// Knows where the detection library puts things for a run.
// The library owns these files; we only locate them.
//
//   runs/
//     Automatic_Weed_Remover/
//       weights/
//         best.pt                  ← best checkpoint
//         last.pt
//       results.csv                ← one row per epoch
//       box_loss_curve.svg         ← written by the visualizer
//       precision_recall_curve.svg
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::{fs, path::PathBuf};

use crate::domain::{config::PipelineConfig, error::PipelineError};

const BEST_STEM: &str = "best";
const PREFERRED_WEIGHTS: &str = "best.pt";

pub struct RunLayout {
    /// `<project_root>/<run_name>`
    dir: PathBuf,
}

impl RunLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.run_dir())
    }

    /// Where the library saves `best.*` and `last.*` checkpoints
    pub fn weights_dir(&self) -> PathBuf {
        self.dir.join("weights")
    }

    /// Per-epoch metrics, appended by the library after every epoch
    pub fn results_csv(&self) -> PathBuf {
        self.dir.join("results.csv")
    }

    /// Charts sit next to results.csv so a run directory holds
    /// both the numbers and their plots.
    pub fn chart_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Locate `weights/best.*`.
    ///
    /// `best.pt` wins when present; otherwise the first file
    /// (in name order) whose stem is `best` is returned, so
    /// exported formats like `best.onnx` are still found.
    pub fn best_weights(&self) -> Option<PathBuf> {
        let weights = self.weights_dir();

        let preferred = weights.join(PREFERRED_WEIGHTS);
        if preferred.is_file() {
            return Some(preferred);
        }

        let mut candidates: Vec<PathBuf> = fs::read_dir(&weights)
            .into_iter()
            .flatten()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| p.file_stem().and_then(|s| s.to_str()) == Some(BEST_STEM))
            .collect();
        candidates.sort();
        candidates.into_iter().next()
    }

    /// Like [`best_weights`](Self::best_weights) but missing weights are an error.
    pub fn require_best_weights(&self) -> Result<PathBuf, PipelineError> {
        self.best_weights().ok_or_else(|| {
            PipelineError::ArtifactNotFound(self.weights_dir().join(PREFERRED_WEIGHTS))
        })
    }
}

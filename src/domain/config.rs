// ============================================================
// Layer 3 - Pipeline Configuration
// ============================================================
// One immutable record holding every knob the pipeline
// understands. It is built once at start-up (from CLI flags
// or the defaults below) and handed by reference to each
// operation. Nothing mutates it afterwards.
//
// Run layout derived from the config:
//
//   <project_root>/<run_name>/
//     weights/best.pt     ← trained artifact (written by YOLO)
//     results.csv         ← per-epoch metrics (written by YOLO)
//
// Reference: Rust Book §5 (Structs), §10 (Traits: FromStr, Display)

use std::{fmt, path::PathBuf, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineError;

// ─── Device ───────────────────────────────────────────────────────────────────
/// Compute device selector, rendered the way the detection CLI expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    /// One or more CUDA devices by index, e.g. `0` or `0,1`
    Cuda(Vec<u32>),
    Cpu,
    /// Apple silicon GPU
    Mps,
}

impl Default for Device {
    fn default() -> Self {
        Device::Cuda(vec![0])
    }
}

impl FromStr for Device {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "cpu" => return Ok(Device::Cpu),
            "mps" => return Ok(Device::Mps),
            _ => {}
        }

        let indices: Result<Vec<u32>, _> = s
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect();

        match indices {
            Ok(ids) if !ids.is_empty() => Ok(Device::Cuda(ids)),
            _ => Err(PipelineError::InvalidDevice(s.to_string())),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
            Device::Mps => f.write_str("mps"),
            Device::Cuda(ids) => {
                let joined: Vec<String> = ids.iter().map(u32::to_string).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

// ─── PipelineConfig ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Dataset descriptor consumed by the detection library
    pub data:         PathBuf,
    /// Base model identifier used to start training
    pub model:        String,
    pub project_root: PathBuf,
    pub run_name:     String,
    pub epochs:       u32,
    pub image_size:   u32,
    pub batch_size:   u32,
    pub device:       Device,
    /// Display predictions and open rendered charts
    pub show:         bool,
    /// Program implementing the detection command line
    pub backend:      PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data:         PathBuf::from("weed.yaml"),
            model:        "yolov9c.pt".to_string(),
            project_root: PathBuf::from("runs"),
            run_name:     "Automatic_Weed_Remover".to_string(),
            epochs:       50,
            image_size:   640,
            batch_size:   16,
            device:       Device::default(),
            show:         true,
            backend:      PathBuf::from("yolo"),
        }
    }
}

impl PipelineConfig {
    /// `<project_root>/<run_name>`, where the library writes this run
    pub fn run_dir(&self) -> PathBuf {
        self.project_root.join(&self.run_name)
    }
}

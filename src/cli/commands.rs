// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Subcommands mirror the menu entries one to one:
//
//   weed-remover              → interactive menu
//   weed-remover menu         → interactive menu
//   weed-remover train        → menu option 1
//   weed-remover evaluate     → menu option 2
//   weed-remover infer --source field.jpg
//                             → menu option 3
//   weed-remover visualize    → menu option 4
//
// Every configuration field can be overridden with a global
// flag; the defaults reproduce the stock weed-detector run.
//
// Reference: Rust Book §12 (Building a CLI Program), clap derive docs

use std::path::PathBuf;
use clap::{Args, Subcommand};

use crate::domain::{
    command::PipelineCommand,
    config::{Device, PipelineConfig},
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the numbered menu and read a choice from stdin
    Menu,

    /// Train the detector on the dataset descriptor
    Train,

    /// Validate the best checkpoint and print its metrics
    Evaluate,

    /// Run the best checkpoint on an image, video, URL or camera
    Infer(InferArgs),

    /// Plot loss and precision/recall curves from results.csv
    Visualize,
}

#[derive(Args, Debug)]
pub struct InferArgs {
    /// Image/video path, URL, glob or camera index
    #[arg(long)]
    pub source: String,
}

impl Commands {
    /// `None` for the interactive menu, which has to ask first
    pub fn into_pipeline_command(self) -> Option<PipelineCommand> {
        match self {
            Commands::Menu      => None,
            Commands::Train     => Some(PipelineCommand::Train),
            Commands::Evaluate  => Some(PipelineCommand::Evaluate),
            Commands::Infer(a)  => Some(PipelineCommand::Infer(a.source)),
            Commands::Visualize => Some(PipelineCommand::Visualize),
        }
    }
}

/// Overrides for every PipelineConfig field
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Dataset descriptor (YOLO data YAML)
    #[arg(long, global = true, default_value = "weed.yaml")]
    pub data: PathBuf,

    /// Base model to start training from
    #[arg(long, global = true, default_value = "yolov9c.pt")]
    pub model: String,

    /// Directory holding all runs
    #[arg(long, global = true, default_value = "runs")]
    pub project_root: PathBuf,

    /// Run name under the project root. Training reuses this
    /// directory, so evaluate/infer/visualize find its files.
    #[arg(long, global = true, default_value = "Automatic_Weed_Remover")]
    pub run_name: String,

    /// Training epochs; the library keeps the best epoch's weights
    /// as best.pt, so more epochs never lose a good checkpoint
    #[arg(long, global = true, default_value_t = 50)]
    pub epochs: u32,

    /// Square training image size in pixels
    #[arg(long, global = true, default_value_t = 640)]
    pub image_size: u32,

    /// Images per training step; lower it when the GPU runs out of memory
    #[arg(long, global = true, default_value_t = 16)]
    pub batch_size: u32,

    /// cpu, mps, or CUDA device indices such as 0 or 0,1
    #[arg(long, global = true, default_value = "0")]
    pub device: Device,

    /// Don't display predictions or open rendered charts.
    /// Needed on headless machines, where the viewer can't start.
    #[arg(long, global = true)]
    pub no_show: bool,

    /// Detection CLI executable. Point it at a virtualenv's `yolo`
    /// when the library isn't on PATH.
    #[arg(long, global = true, default_value = "yolo")]
    pub backend: PathBuf,
}

/// The application layer never sees clap types.
impl From<ConfigArgs> for PipelineConfig {
    fn from(a: ConfigArgs) -> Self {
        PipelineConfig {
            data:         a.data,
            model:        a.model,
            project_root: a.project_root,
            run_name:     a.run_name,
            epochs:       a.epochs,
            image_size:   a.image_size,
            batch_size:   a.batch_size,
            device:       a.device,
            show:         !a.no_show,
            backend:      a.backend,
        }
    }
}

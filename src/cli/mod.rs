// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. `clap` parses the
// global configuration flags and an optional subcommand;
// without a subcommand the numbered console menu is shown.
//
// Either way exactly one PipelineCommand is dispatched and
// the process exits.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod dispatch;
pub mod menu;

use std::io;
use anyhow::Result;
use clap::Parser;

use commands::{Commands, ConfigArgs};
use dispatch::{dispatch, run_interactive, Pipeline};
use crate::domain::config::PipelineConfig;
use crate::infra::charts::SvgChartRenderer;
use crate::ml::ultralytics::UltralyticsCli;

#[derive(Parser, Debug)]
#[command(
    name = "weed-remover",
    version,
    about = "Train, evaluate, run and chart a YOLO weed detector."
)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Action to run; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Build the pipeline from the parsed flags and run one command.
    pub fn run(self) -> Result<()> {
        let config: PipelineConfig = self.config.into();
        let backend  = UltralyticsCli::from_config(&config);
        let renderer = SvgChartRenderer::new(config.show);
        let pipeline = Pipeline {
            config:   &config,
            backend:  &backend,
            renderer: &renderer,
        };

        tracing::debug!("Run directory: '{}'", config.run_dir().display());

        let stdout = io::stdout();
        match self.command.and_then(Commands::into_pipeline_command) {
            Some(command) => dispatch(&command, &pipeline, &mut stdout.lock()),
            None => {
                let stdin = io::stdin();
                run_interactive(&mut stdin.lock(), &mut stdout.lock(), &pipeline)
            }
        }
    }
}

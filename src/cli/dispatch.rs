// ============================================================
// Layer 1 - Command Dispatch
// ============================================================
// Runs exactly one PipelineCommand and prints its progress
// and results. The use cases return values; this is the only
// place that formats them for the console.

use std::io::{BufRead, Write};
use anyhow::Result;

use crate::application::{
    evaluate_use_case::EvaluateUseCase,
    infer_use_case::InferUseCase,
    train_use_case::TrainUseCase,
    visualize_use_case::{VisualizeOutcome, VisualizeUseCase},
};
use crate::cli::menu;
use crate::domain::{
    command::PipelineCommand,
    config::PipelineConfig,
    error::PipelineError,
    metrics::ValidationMetrics,
    traits::{ChartRenderer, DetectionBackend},
};

/// Everything a command needs, borrowed for one process run
pub struct Pipeline<'a> {
    pub config:   &'a PipelineConfig,
    pub backend:  &'a dyn DetectionBackend,
    pub renderer: &'a dyn ChartRenderer,
}

/// Menu first, then dispatch whatever was chosen.
pub fn run_interactive<R: BufRead, W: Write>(
    input:    &mut R,
    out:      &mut W,
    pipeline: &Pipeline<'_>,
) -> Result<()> {
    match menu::prompt(input, out)? {
        Some(command) => dispatch(&command, pipeline, out),
        None          => Ok(()),
    }
}

/// Run one command and print its console report to `out`.
///
/// Use-case errors come back with a hint attached when the user
/// can fix them; a missing results.csv is reported, not an error.
pub fn dispatch<W: Write>(
    command:  &PipelineCommand,
    pipeline: &Pipeline<'_>,
    out:      &mut W,
) -> Result<()> {
    let Pipeline { config, backend, renderer } = *pipeline;

    match command {
        PipelineCommand::Train => {
            writeln!(out, "\n[INFO] Starting YOLOv9 Training...")?;
            out.flush()?;
            let best = TrainUseCase::new(config, backend).execute().map_err(with_hint)?;
            writeln!(out, "[INFO] Training Completed!")?;
            if let Some(path) = best {
                writeln!(out, "[INFO] Best weights: {}", path.display())?;
            }
        }

        PipelineCommand::Evaluate => {
            writeln!(out, "\n[INFO] Evaluating Model...")?;
            out.flush()?;
            let metrics = EvaluateUseCase::new(config, backend).execute().map_err(with_hint)?;
            write_metrics(out, &metrics)?;
        }

        PipelineCommand::Infer(source) => {
            writeln!(out, "\n[INFO] Running Inference...")?;
            out.flush()?;
            InferUseCase::new(config, backend).execute(source).map_err(with_hint)?;
            writeln!(out, "[INFO] Inference Done!")?;
        }

        PipelineCommand::Visualize => {
            writeln!(out, "\n[INFO] Visualizing Training Curves...")?;
            match VisualizeUseCase::new(config, renderer).execute().map_err(with_hint)? {
                VisualizeOutcome::Rendered(paths) => {
                    for p in &paths {
                        writeln!(out, "[INFO] Saved {}", p.display())?;
                    }
                    writeln!(out, "[INFO] Visualization Complete!")?;
                }
                VisualizeOutcome::ResultsMissing(path) => {
                    tracing::debug!("Looked for '{}'", path.display());
                    writeln!(out, "[ERROR] results.csv not found!")?;
                }
            }
        }
    }

    Ok(())
}

/// Each value printed under its own name, four decimals like the library's table
fn write_metrics<W: Write>(out: &mut W, m: &ValidationMetrics) -> std::io::Result<()> {
    writeln!(out, "\n===== PERFORMANCE METRICS =====")?;
    writeln!(out, "Precision (P): {:.4}", m.precision)?;
    writeln!(out, "Recall (R):    {:.4}", m.recall)?;
    writeln!(out, "mAP@50:        {:.4}", m.map50)?;
    writeln!(out, "mAP@50-95:     {:.4}", m.map50_95)?;
    writeln!(out, "================================")
}

/// Attach a next-step hint to errors the user can fix.
fn with_hint(err: PipelineError) -> anyhow::Error {
    if !err.is_user_recoverable() {
        // main prints it; logging here would show it twice
        return err.into();
    }

    let hint = match &err {
        PipelineError::ArtifactNotFound(_) => "train a model first (menu option 1 or `weed-remover train`)",
        PipelineError::InvalidSource(_)    => "pass an existing image/video path, a URL, or a camera index",
        _                                  => "check the command-line options",
    };
    tracing::debug!("{err}");
    anyhow::Error::new(err).context(hint)
}

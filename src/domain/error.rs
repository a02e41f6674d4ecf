// ============================================================
// Layer 3 - Pipeline Errors
// ============================================================
// Every operation returns Result<_, PipelineError>.
// Variants split into two groups:
//
//   user-recoverable - the user can fix it and re-run
//                      (train first, pick another file, ...)
//   fatal            - the external tools failed or the
//                      filesystem is in a bad state
//
// The CLI layer converts into anyhow at the process boundary.
//
// Reference: Rust Book §9 (Error Handling), thiserror docs

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("trained model not found at '{}'", .0.display())]
    ArtifactNotFound(PathBuf),

    #[error("invalid inference source '{0}'")]
    InvalidSource(String),

    #[error("invalid device selector '{0}' (expected cpu, mps or CUDA indices like 0,1)")]
    InvalidDevice(String),

    #[error("cannot launch detection backend '{}': {source}", program.display())]
    BackendUnavailable {
        program: PathBuf,
        #[source]
        source:  io::Error,
    },

    #[error("detection backend failed during {action} ({status})")]
    ExternalLibraryFailure {
        action: &'static str,
        status: String,
    },

    #[error("validation output did not contain a summary row")]
    MetricsUnavailable,

    #[error("cannot read results table '{}': {source}", path.display())]
    ResultsTable {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot render chart '{}': {message}", path.display())]
    Chart {
        path:    PathBuf,
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl PipelineError {
    /// True when the user can resolve the condition without touching
    /// the environment (train a model first, fix a path or a flag).
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            PipelineError::ArtifactNotFound(_)
                | PipelineError::InvalidSource(_)
                | PipelineError::InvalidDevice(_)
        )
    }
}

// ============================================================
// Layer 3 - Pipeline Commands
// ============================================================
// The four things the pipeline can do, as one tagged enum.
// Both the interactive menu and the subcommands parse into
// this type, and the dispatcher matches on it.

/// One selected pipeline action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineCommand {
    Train,
    Evaluate,
    /// Run prediction on an image/video path, URL or camera index
    Infer(String),
    Visualize,
}

/// Result of reading a menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// "1", "2" or "4"; "3" needs a source first
    Command(PipelineCommand),
    /// "3": caller must ask for the source path
    NeedsSource,
    Invalid(String),
}

impl MenuChoice {
    /// Map one trimmed line of menu input to a choice.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Command(PipelineCommand::Train),
            "2" => MenuChoice::Command(PipelineCommand::Evaluate),
            "3" => MenuChoice::NeedsSource,
            "4" => MenuChoice::Command(PipelineCommand::Visualize),
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

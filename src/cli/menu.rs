// ============================================================
// Layer 1 - Interactive Menu
// ============================================================
// Prints the banner and the numbered options, reads one line,
// and for option 3 reads a second line with the source path.
// Generic over BufRead/Write so tests can drive it with
// in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::domain::command::{MenuChoice, PipelineCommand};

const BANNER: &str = "\
=====================================
 AUTOMATIC WEED REMOVER - YOLOv9
=====================================";

const OPTIONS: &str = "\
Choose an option:
1 - Train Model
2 - Evaluate Model
3 - Run Inference on Image/Video
4 - Visualize Training Curves";

pub const INVALID_CHOICE: &str = "Invalid choice!";

/// Show the menu and read a selection.
///
/// Returns `None` after printing "Invalid choice!" for anything
/// other than 1–4 (including end of input).
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out:   &mut W,
) -> io::Result<Option<PipelineCommand>> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "\n{OPTIONS}")?;

    let choice = ask(input, out, "Enter your choice: ")?;
    let command = match MenuChoice::parse(&choice) {
        MenuChoice::Command(cmd) => cmd,
        MenuChoice::NeedsSource => {
            let source = ask(input, out, "Enter image/video path: ")?;
            PipelineCommand::Infer(source)
        }
        MenuChoice::Invalid(raw) => {
            tracing::debug!("Rejected menu input {raw:?}");
            writeln!(out, "{INVALID_CHOICE}")?;
            return Ok(None);
        }
    };
    Ok(Some(command))
}

/// Print `question` without a newline and read one line back,
/// minus its line ending.
///
/// End of input reads as an empty line. Bytes that are not UTF-8
/// are replaced rather than rejected, so a garbled choice still
/// ends up as "Invalid choice!" instead of an I/O error.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<String> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

//! Command handlers, one module per subcommand.

use serde::Serialize;
use tidy_adapters::{ConsoleSink, MemorySink};
use tidy_core::application::ReportSink;
use tracing::warn;

use crate::error::CliResult;
use crate::output::OutputManager;

pub mod completions;
pub mod config;
pub mod demo;
pub mod payroll;
pub mod registry;

/// Destination for the lines a service reports during one command.
///
/// Lines stream to stdout, except in JSON mode where they are captured and
/// folded into the command's JSON document.
pub enum Transcript {
    Console,
    Captured(MemorySink),
}

impl Transcript {
    pub fn for_output(output: &OutputManager) -> Self {
        if output.is_json() {
            Self::Captured(MemorySink::new())
        } else {
            Self::Console
        }
    }

    /// A sink handle to give to a service.
    pub fn sink(&self) -> Box<dyn ReportSink> {
        match self {
            Self::Console => Box::new(ConsoleSink::new()),
            Self::Captured(memory) => Box::new(memory.clone()),
        }
    }

    /// Captured lines; always empty when streaming to the console.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Console => Vec::new(),
            Self::Captured(memory) => memory.lines(),
        }
    }
}

/// JSON document emitted when a command fails after reporting lines.
#[derive(Debug, Serialize)]
struct FailedRun {
    error: String,
    exit_code: u8,
    lines: Vec<String>,
}

/// Run `step` against a fresh [`Transcript`].
///
/// In JSON mode a failure still emits the lines captured so far, together
/// with the error, before the error propagates.
pub fn transcribed<T>(
    output: &OutputManager,
    step: impl FnOnce(&Transcript) -> CliResult<T>,
) -> CliResult<T> {
    let transcript = Transcript::for_output(output);
    step(&transcript).inspect_err(|err| {
        if let Transcript::Captured(memory) = &transcript {
            let failed = FailedRun {
                error: err.to_string(),
                exit_code: err.exit_code(),
                lines: memory.lines(),
            };
            if let Err(e) = output.json(&failed) {
                warn!("Could not emit the failed run: {e}");
            }
        }
    })
}

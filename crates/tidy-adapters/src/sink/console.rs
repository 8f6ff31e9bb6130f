//! Console sink writing to standard output.

use console::Term;
use tracing::trace;

use tidy_core::{
    application::{ApplicationError, ports::ReportSink},
    error::TidyResult,
};

/// Production sink: one line per report on stdout.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    term: Term,
}

impl ConsoleSink {
    /// Create a sink bound to standard output.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for ConsoleSink {
    fn emit(&self, line: &str) -> TidyResult<()> {
        trace!(line, "emit");
        self.term.write_line(line).map_err(|e| {
            ApplicationError::OutputFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

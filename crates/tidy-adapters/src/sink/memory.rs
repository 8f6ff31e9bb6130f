//! In-memory sink adapter for testing and structured output.

use std::sync::{Arc, RwLock};

use tidy_core::{
    application::{ApplicationError, ports::ReportSink},
    error::TidyResult,
};

/// Collects emitted lines. Clones share the same buffer, so a test can keep
/// one handle and give the other to a service.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Number of lines emitted.
    pub fn len(&self) -> usize {
        self.lines.read().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Check if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured lines.
    pub fn clear(&self) -> TidyResult<()> {
        self.lines.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, line: &str) -> TidyResult<()> {
        self.lines.write().map_err(poisoned)?.push(line.to_owned());
        Ok(())
    }
}

fn poisoned<T>(_: T) -> ApplicationError {
    ApplicationError::OutputFailed {
        reason: "memory sink lock poisoned".into(),
    }
}

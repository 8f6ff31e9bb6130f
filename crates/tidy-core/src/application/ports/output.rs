//! Driven (output) ports - implemented by infrastructure.

use crate::error::TidyResult;

/// Port for emitting result lines (payments, rosters, registrations).
///
/// Implemented by:
/// - `tidy_adapters::ConsoleSink` (stdout)
/// - `tidy_adapters::MemorySink` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink: Send + Sync {
    /// Write one line.
    fn emit(&self, line: &str) -> TidyResult<()>;
}

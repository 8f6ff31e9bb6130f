//! Port definitions (interfaces) for the application layer.
//!
//! Driven ports are implemented by `tidy-adapters`:
//! - [`ReportSink`]: where human-readable result lines are written

mod output;

pub use output::ReportSink;

#[cfg(test)]
pub use output::MockReportSink;

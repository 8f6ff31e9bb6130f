//! Application layer for tidy.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PayrollService, RegistryService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Business rules live in `crate::domain`; services only sequence them and
//! route their output to a [`ReportSink`].

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{PayrollService, RegistryService};

// Re-export port traits (for adapter implementation)
pub use ports::ReportSink;

pub use error::ApplicationError;

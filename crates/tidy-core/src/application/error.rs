//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No employee at the requested position.
    #[error("No employee at position {index} (company has {count})")]
    EmployeeNotFound { index: usize, count: usize },

    /// A report line could not be written.
    #[error("Output failed: {reason}")]
    OutputFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmployeeNotFound { count, .. } => vec![
                format!("Valid positions are 0..{count}"),
                "Employees are addressed by insertion order".into(),
            ],
            Self::OutputFailed { .. } => vec![
                "Check that standard output is writable".into(),
                "If output is piped, make sure the reader is still running".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmployeeNotFound { .. } => ErrorCategory::NotFound,
            Self::OutputFailed { .. } => ErrorCategory::Internal,
        }
    }
}

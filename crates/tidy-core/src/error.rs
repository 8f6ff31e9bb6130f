//! Unified error handling for tidy core.
//!
//! [`TidyError`] wraps domain and application errors so callers have one
//! type to propagate, while each layer keeps its own precise variants.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, VacationDaysShortageError, VehicleInfoMissingError};

/// Root error type for tidy core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TidyError {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl From<VacationDaysShortageError> for TidyError {
    fn from(err: VacationDaysShortageError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<VehicleInfoMissingError> for TidyError {
    fn from(err: VehicleInfoMissingError) -> Self {
        Self::Domain(err.into())
    }
}

impl TidyError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Precondition => ErrorCategory::Precondition,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Precondition,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type TidyResult<T> = Result<T, TidyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortage_converts_to_precondition() {
        let err: TidyError = VacationDaysShortageError::new(5, 2).into();
        assert_eq!(err.category(), ErrorCategory::Precondition);
        assert!(matches!(
            err,
            TidyError::Domain(DomainError::VacationDaysShortage(_))
        ));
    }

    #[test]
    fn missing_info_converts_to_not_found() {
        let err: TidyError = VehicleInfoMissingError::new("Ford", "Focus").into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("Focus"));
    }
}

// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// A vacation operation asked for more days than the employee has left.
///
/// Raised by both `take_a_holiday` and `payout_a_holiday`; no days are
/// consumed when this is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (requested {requested_days}, remaining {remaining_days})")]
pub struct VacationDaysShortageError {
    pub requested_days: u32,
    pub remaining_days: u32,
    pub message: String,
}

impl VacationDaysShortageError {
    pub fn new(requested_days: u32, remaining_days: u32) -> Self {
        // A single day is a holiday; any larger block is a payout.
        let message = if requested_days == 1 {
            "You don't have any holidays left. Now back to work, you!".to_owned()
        } else {
            format!(
                "You don't have enough holidays left over for a payout of {requested_days} days"
            )
        };
        Self {
            requested_days,
            remaining_days,
            message,
        }
    }
}

/// Registration was requested for a (brand, model) pair absent from the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (brand: {brand}, model: {model})")]
pub struct VehicleInfoMissingError {
    pub brand: String,
    pub model: String,
    pub message: String,
}

impl VehicleInfoMissingError {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            message: "Vehicle information is missing".to_owned(),
        }
    }
}

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Precondition failures
    // ========================================================================
    #[error(transparent)]
    VacationDaysShortage(#[from] VacationDaysShortageError),

    // ========================================================================
    // Not Found
    // ========================================================================
    #[error(transparent)]
    VehicleInfoMissing(#[from] VehicleInfoMissingError),

    // ========================================================================
    // Parsing
    // ========================================================================
    #[error("unknown {kind}: '{value}'")]
    InvalidValue { kind: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::VacationDaysShortage(e) => vec![
                format!(
                    "Only {} vacation day(s) remain, {} requested",
                    e.remaining_days, e.requested_days
                ),
                "Check the balance before taking or paying out holidays".into(),
            ],
            Self::VehicleInfoMissing(e) => vec![
                format!("No catalog entry for {} {}", e.brand, e.model),
                "Add the model to the registry before registering a vehicle".into(),
                "Brand and model are matched exactly (case sensitive)".into(),
            ],
            Self::InvalidValue { kind, .. } => match *kind {
                "role" => vec![
                    "Valid roles: president, vicepresident, manager, lead, worker, intern".into(),
                ],
                "fuel type" => vec!["Valid fuel types: electric, petrol, diesel".into()],
                _ => vec!["See --help for accepted values".into()],
            },
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::VacationDaysShortage(_) => ErrorCategory::Precondition,
            Self::VehicleInfoMissing(_) => ErrorCategory::NotFound,
            Self::InvalidValue { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Precondition,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortage_message_for_empty_balance() {
        let err = VacationDaysShortageError::new(1, 0);
        assert!(err.message.contains("any holidays left"));
        assert!(err.to_string().contains("requested 1, remaining 0"));
    }

    #[test]
    fn shortage_message_for_payout() {
        let err = VacationDaysShortageError::new(5, 4);
        assert!(err.message.contains("payout of 5 days"));
    }

    #[test]
    fn shortage_message_follows_requested_days() {
        let payout = VacationDaysShortageError::new(5, 0);
        assert!(payout.message.contains("payout of 5 days"));
        assert!(!payout.message.contains("any holidays left"));
    }

    #[test]
    fn missing_info_carries_brand_and_model() {
        let err: DomainError = VehicleInfoMissingError::new("Ford", "Focus").into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("Ford"));
        assert!(err.suggestions().iter().any(|s| s.contains("Ford Focus")));
    }

    #[test]
    fn invalid_role_lists_roles() {
        let err = DomainError::InvalidValue {
            kind: "role",
            value: "ceo".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions()[0].contains("manager"));
    }
}

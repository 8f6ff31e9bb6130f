//! Employees and their pay variants.
//!
//! Every pay variant implements [`Employee`] and renders its own payment
//! description, so callers such as [`Company`](super::company::Company)
//! never look at the concrete type. A new variant only needs a new
//! `impl Employee`.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{error::VacationDaysShortageError, value_objects::Role};

/// Vacation balance every employee starts with.
pub const DEFAULT_VACATION_DAYS: u32 = 25;

/// Number of days converted to money by a single payout.
pub const FIXED_VACATION_DAYS_PAYOUT: u32 = 5;

// ── EmployeeProfile ───────────────────────────────────────────────────────────

/// Attributes shared by all pay variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeProfile {
    name: String,
    role: Role,
    vacation_days: u32,
}

impl EmployeeProfile {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            vacation_days: DEFAULT_VACATION_DAYS,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn vacation_days(&self) -> u32 {
        self.vacation_days
    }

    /// Take a single day off. Returns the remaining balance.
    pub fn take_a_holiday(&mut self) -> Result<u32, VacationDaysShortageError> {
        self.deduct(1)
    }

    /// Cash out a block of [`FIXED_VACATION_DAYS_PAYOUT`] days. Returns the
    /// remaining balance.
    pub fn payout_a_holiday(&mut self) -> Result<u32, VacationDaysShortageError> {
        self.deduct(FIXED_VACATION_DAYS_PAYOUT)
    }

    fn deduct(&mut self, days: u32) -> Result<u32, VacationDaysShortageError> {
        if self.vacation_days < days {
            return Err(VacationDaysShortageError::new(days, self.vacation_days));
        }
        self.vacation_days -= days;
        Ok(self.vacation_days)
    }
}

// ── Employee trait ────────────────────────────────────────────────────────────

/// An employee with a pay strategy of its own.
pub trait Employee: fmt::Debug + Send + Sync {
    fn profile(&self) -> &EmployeeProfile;

    fn profile_mut(&mut self) -> &mut EmployeeProfile;

    /// Describe the payment this employee receives.
    fn pay(&self) -> String;

    fn name(&self) -> &str {
        self.profile().name()
    }

    fn role(&self) -> Role {
        self.profile().role()
    }

    fn vacation_days(&self) -> u32 {
        self.profile().vacation_days()
    }

    fn take_a_holiday(&mut self) -> Result<u32, VacationDaysShortageError> {
        self.profile_mut().take_a_holiday()
    }

    fn payout_a_holiday(&mut self) -> Result<u32, VacationDaysShortageError> {
        self.profile_mut().payout_a_holiday()
    }
}

// ── SalariedEmployee ──────────────────────────────────────────────────────────

/// Employee paid a fixed monthly salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalariedEmployee {
    #[serde(flatten)]
    profile: EmployeeProfile,
    monthly_salary_dollars: Decimal,
}

impl SalariedEmployee {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            profile: EmployeeProfile::new(name, role),
            monthly_salary_dollars: Decimal::new(5000, 0),
        }
    }

    pub fn with_monthly_salary(mut self, dollars: Decimal) -> Self {
        self.monthly_salary_dollars = dollars;
        self
    }

    pub fn with_vacation_days(mut self, days: u32) -> Self {
        self.profile.vacation_days = days;
        self
    }

    pub fn monthly_salary_dollars(&self) -> Decimal {
        self.monthly_salary_dollars
    }
}

impl Employee for SalariedEmployee {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut EmployeeProfile {
        &mut self.profile
    }

    fn pay(&self) -> String {
        format!(
            "Paying {} monthly salary of ${}.",
            self.profile.name, self.monthly_salary_dollars
        )
    }
}

// ── HourlyEmployee ────────────────────────────────────────────────────────────

/// Employee paid per hour worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyEmployee {
    #[serde(flatten)]
    profile: EmployeeProfile,
    hourly_rate_dollars: Decimal,
    hours_worked: u32,
}

impl HourlyEmployee {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            profile: EmployeeProfile::new(name, role),
            hourly_rate_dollars: Decimal::new(50, 0),
            hours_worked: 10,
        }
    }

    pub fn with_hourly_rate(mut self, dollars: Decimal) -> Self {
        self.hourly_rate_dollars = dollars;
        self
    }

    pub fn with_hours_worked(mut self, hours: u32) -> Self {
        self.hours_worked = hours;
        self
    }

    pub fn with_vacation_days(mut self, days: u32) -> Self {
        self.profile.vacation_days = days;
        self
    }

    pub fn hourly_rate_dollars(&self) -> Decimal {
        self.hourly_rate_dollars
    }

    pub fn hours_worked(&self) -> u32 {
        self.hours_worked
    }
}

impl Employee for HourlyEmployee {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut EmployeeProfile {
        &mut self.profile
    }

    fn pay(&self) -> String {
        format!(
            "Paying {} hourly rate of ${} for {} hours.",
            self.profile.name, self.hourly_rate_dollars, self.hours_worked
        )
    }
}

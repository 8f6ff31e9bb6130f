//! Payroll Service - company use cases.
//!
//! Wraps a [`Company`] and writes every result line to a [`ReportSink`].
//! Employees are addressed by position (insertion order), since names may
//! repeat.

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::ReportSink},
    domain::{Company, Employee, Role},
    error::TidyResult,
};

/// Service for payroll operations.
pub struct PayrollService {
    company: Company,
    sink: Box<dyn ReportSink>,
}

impl PayrollService {
    /// Create a service around an empty company.
    pub fn new(sink: Box<dyn ReportSink>) -> Self {
        Self::with_company(Company::new(), sink)
    }

    pub fn with_company(company: Company, sink: Box<dyn ReportSink>) -> Self {
        Self { company, sink }
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    /// Add an employee at the end of the roster.
    pub fn hire(&mut self, employee: impl Employee + 'static) {
        info!(name = employee.name(), role = %employee.role(), "Employee hired");
        self.company.add_employee(employee);
    }

    /// Emit one line listing every employee with `role`. Returns how many
    /// matched.
    #[instrument(skip(self), fields(role = %role))]
    pub fn roster(&self, role: Role) -> TidyResult<usize> {
        let found = self.company.find_employees(role);
        let names = if found.is_empty() {
            "(none)".to_owned()
        } else {
            found
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.sink.emit(&format!("{role}: {names}"))?;
        Ok(found.len())
    }

    /// Pay the employee at `index`.
    #[instrument(skip(self))]
    pub fn pay(&self, index: usize) -> TidyResult<String> {
        let employee = self.company.employee(index).ok_or(self.not_found(index))?;
        let line = self.company.pay_employee(employee);
        self.sink.emit(&line)?;
        Ok(line)
    }

    /// Pay every employee with `role`, in roster order. Returns how many
    /// were paid.
    #[instrument(skip(self), fields(role = %role))]
    pub fn pay_role(&self, role: Role) -> TidyResult<usize> {
        let employees = self.company.find_employees(role);
        for employee in &employees {
            let line = self.company.pay_employee(*employee);
            self.sink.emit(&line)?;
        }
        Ok(employees.len())
    }

    /// One day off for the employee at `index`. Returns the remaining days.
    #[instrument(skip(self))]
    pub fn take_a_holiday(&mut self, index: usize) -> TidyResult<u32> {
        let not_found = self.not_found(index);
        let employee = self.company.employee_mut(index).ok_or(not_found)?;

        let remaining = employee.take_a_holiday()?;
        info!(name = employee.name(), remaining, "Holiday taken");

        self.sink.emit(&format!(
            "Have fun on your holiday, {}! {remaining} days left.",
            employee.name()
        ))?;
        Ok(remaining)
    }

    /// Cash out a fixed block of days for the employee at `index`. Returns
    /// the remaining days.
    #[instrument(skip(self))]
    pub fn payout_a_holiday(&mut self, index: usize) -> TidyResult<u32> {
        let not_found = self.not_found(index);
        let employee = self.company.employee_mut(index).ok_or(not_found)?;

        let remaining = employee.payout_a_holiday()?;
        info!(name = employee.name(), remaining, "Holiday paid out");

        self.sink.emit(&format!(
            "Paying out a holiday to {}. Holidays left: {remaining}",
            employee.name()
        ))?;
        Ok(remaining)
    }

    fn not_found(&self, index: usize) -> ApplicationError {
        ApplicationError::EmployeeNotFound {
            index,
            count: self.company.len(),
        }
    }
}

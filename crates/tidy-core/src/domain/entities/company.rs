//! A company: an ordered list of employees.

use tracing::info;

use crate::domain::{entities::employee::Employee, value_objects::Role};

/// Employees in insertion order. Duplicate names are allowed; an employee
/// is identified by position.
#[derive(Debug, Default)]
pub struct Company {
    employees: Vec<Box<dyn Employee>>,
}

impl Company {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_employee(&mut self, employee: impl Employee + 'static) {
        self.employees.push(Box::new(employee));
    }

    /// All employees with the given role, in insertion order.
    pub fn find_employees(&self, role: Role) -> Vec<&dyn Employee> {
        self.employees
            .iter()
            .filter(|e| e.role() == role)
            .map(|e| &**e)
            .collect()
    }

    /// Pay an employee and return the payment line.
    pub fn pay_employee(&self, employee: &dyn Employee) -> String {
        let line = employee.pay();
        info!(employee = employee.name(), role = %employee.role(), "{line}");
        line
    }

    pub fn employees(&self) -> &[Box<dyn Employee>] {
        &self.employees
    }

    pub fn employee(&self, index: usize) -> Option<&dyn Employee> {
        self.employees.get(index).map(|e| &**e)
    }

    pub fn employee_mut(&mut self, index: usize) -> Option<&mut (dyn Employee + 'static)> {
        self.employees.get_mut(index).map(|e| &mut **e)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

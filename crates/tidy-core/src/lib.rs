//! tidy Core - payroll and vehicle registry models
//!
//! This crate provides the domain and application layers for tidy,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             tidy-cli (CLI)              │
//! │   (builds sample data, drives services) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (PayrollService, RegistryService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │              (ReportSink)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     tidy-adapters (Infrastructure)      │
//! │        (ConsoleSink, MemorySink)        │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (Company, Employee, VehicleRegistry)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tidy_core::domain::{Company, Employee, Role, SalariedEmployee};
//!
//! let mut company = Company::new();
//! company.add_employee(SalariedEmployee::new("Louis", Role::Manager));
//!
//! let managers = company.find_employees(Role::Manager);
//! assert_eq!(company.pay_employee(managers[0]), "Paying Louis monthly salary of $5000.");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{PayrollService, RegistryService, ports::ReportSink};
    pub use crate::domain::{
        Company, Employee, FuelType, HourlyEmployee, RegistryStatus, Role, SalariedEmployee,
        VacationDaysShortageError, Vehicle, VehicleInfoMissingError, VehicleModelInfo,
        VehicleRegistry,
    };
    pub use crate::error::{TidyError, TidyResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

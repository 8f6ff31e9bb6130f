mod payroll_service;
mod registry_service;

pub use payroll_service::PayrollService;
pub use registry_service::RegistryService;

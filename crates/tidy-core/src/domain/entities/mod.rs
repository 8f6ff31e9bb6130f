pub mod company;
pub mod employee;
pub mod registry;
pub mod vehicle;

pub use company::Company;
pub use employee::{Employee, EmployeeProfile, HourlyEmployee, SalariedEmployee};
pub use registry::VehicleRegistry;
pub use vehicle::{Vehicle, VehicleModelInfo};

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for tidy.
//!
//! Two independent models live here:
//!
//! - **Payroll**: [`Role`], [`Employee`] and its pay variants, [`Company`]
//! - **Registry**: [`FuelType`], [`VehicleModelInfo`], [`Vehicle`],
//!   [`VehicleRegistry`], [`RegistryStatus`]
//!
//! Neither model depends on the other. Everything is synchronous and in
//! memory; output goes through the application layer's ports.

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod identifiers;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    Company, Employee, EmployeeProfile, HourlyEmployee, SalariedEmployee, Vehicle,
    VehicleModelInfo, VehicleRegistry,
    employee::{DEFAULT_VACATION_DAYS, FIXED_VACATION_DAYS_PAYOUT},
};

pub use error::{DomainError, ErrorCategory, VacationDaysShortageError, VehicleInfoMissingError};

pub use identifiers::{VEHICLE_ID_LENGTH, generate_vehicle_id, generate_vehicle_license};

pub use value_objects::{FuelType, RegistryStatus, Role};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal::Decimal;

    use super::*;

    fn sample_company() -> Company {
        let mut company = Company::new();
        company.add_employee(SalariedEmployee::new("Louis", Role::Manager));
        company.add_employee(HourlyEmployee::new("Brenda", Role::President));
        company.add_employee(HourlyEmployee::new("Tim", Role::Intern));
        company.add_employee(SalariedEmployee::new("Anna", Role::Manager));
        company.add_employee(HourlyEmployee::new("Louis", Role::Intern));
        company
    }

    fn names(employees: &[&dyn Employee]) -> Vec<String> {
        employees.iter().map(|e| e.name().to_owned()).collect()
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn role_parses_correctly() {
        assert_eq!(Role::from_str("manager").unwrap(), Role::Manager);
        assert_eq!(Role::from_str("VP").unwrap(), Role::VicePresident);
        assert_eq!(Role::from_str("vice-president").unwrap(), Role::VicePresident);
        assert!(Role::from_str("ceo").is_err());
    }

    #[test]
    fn role_display_round_trips_through_from_str() {
        for role in Role::ALL {
            assert_eq!(Role::from_str(&role.to_string()).unwrap(), role);
        }
    }

    #[test]
    fn fuel_type_tax_rates() {
        assert_eq!(FuelType::Electric.tax_rate(), Decimal::new(2, 2));
        assert_eq!(FuelType::Petrol.tax_rate(), Decimal::new(5, 2));
        assert_eq!(FuelType::Diesel.tax_rate(), Decimal::new(5, 2));
        assert_eq!(FuelType::default(), FuelType::Electric);
    }

    // ========================================================================
    // Company Tests
    // ========================================================================

    #[test]
    fn find_employees_keeps_insertion_order() {
        let company = sample_company();

        assert_eq!(
            names(&company.find_employees(Role::Manager)),
            vec!["Louis", "Anna"]
        );
        assert_eq!(
            names(&company.find_employees(Role::Intern)),
            vec!["Tim", "Louis"]
        );
    }

    #[test]
    fn find_employees_is_exact_subsequence_for_every_role() {
        let company = sample_company();

        for role in Role::ALL {
            let expected: Vec<String> = company
                .employees()
                .iter()
                .filter(|e| e.role() == role)
                .map(|e| e.name().to_owned())
                .collect();
            assert_eq!(names(&company.find_employees(role)), expected);
        }
    }

    #[test]
    fn find_employees_without_match_is_empty() {
        let company = sample_company();
        assert!(company.find_employees(Role::VicePresident).is_empty());
        assert!(Company::new().find_employees(Role::Worker).is_empty());
    }

    #[test]
    fn duplicate_names_are_kept() {
        let company = sample_company();
        assert_eq!(company.len(), 5);
        assert_eq!(
            company
                .employees()
                .iter()
                .filter(|e| e.name() == "Louis")
                .count(),
            2
        );
    }

    #[test]
    fn pay_employee_dispatches_to_variant() {
        let company = sample_company();

        let salaried = company.pay_employee(company.employee(0).unwrap());
        let hourly = company.pay_employee(company.employee(1).unwrap());

        assert_eq!(salaried, "Paying Louis monthly salary of $5000.");
        assert_eq!(hourly, "Paying Brenda hourly rate of $50 for 10 hours.");
    }

    #[derive(Debug)]
    struct Contractor {
        profile: EmployeeProfile,
        invoice: u32,
    }

    impl Employee for Contractor {
        fn profile(&self) -> &EmployeeProfile {
            &self.profile
        }

        fn profile_mut(&mut self) -> &mut EmployeeProfile {
            &mut self.profile
        }

        fn pay(&self) -> String {
            format!("Paying {} invoice of ${}.", self.profile.name(), self.invoice)
        }
    }

    #[test]
    fn new_pay_variant_needs_no_company_change() {
        let mut company = Company::new();
        company.add_employee(Contractor {
            profile: EmployeeProfile::new("Zed", Role::Worker),
            invoice: 1200,
        });

        let worker = company.find_employees(Role::Worker)[0];
        assert_eq!(company.pay_employee(worker), "Paying Zed invoice of $1200.");
    }

    // ========================================================================
    // Vacation Tests
    // ========================================================================

    #[test]
    fn new_employee_has_default_balance() {
        let employee = SalariedEmployee::new("Louis", Role::Manager);
        assert_eq!(employee.vacation_days(), DEFAULT_VACATION_DAYS);
    }

    #[test]
    fn take_a_holiday_with_empty_balance_fails() {
        let mut employee = SalariedEmployee::new("Louis", Role::Manager).with_vacation_days(0);

        let err = employee.take_a_holiday().unwrap_err();

        assert_eq!(err.requested_days, 1);
        assert_eq!(err.remaining_days, 0);
        assert_eq!(employee.vacation_days(), 0);
    }

    #[test]
    fn take_a_holiday_decrements_by_one() {
        let mut employee = HourlyEmployee::new("Tim", Role::Intern).with_vacation_days(3);

        assert_eq!(employee.take_a_holiday().unwrap(), 2);
        assert_eq!(employee.vacation_days(), 2);
    }

    #[test]
    fn payout_with_short_balance_fails_untouched() {
        let mut employee = SalariedEmployee::new("Louis", Role::Manager).with_vacation_days(4);

        let err = employee.payout_a_holiday().unwrap_err();

        assert_eq!(err.requested_days, FIXED_VACATION_DAYS_PAYOUT);
        assert_eq!(err.remaining_days, 4);
        assert_eq!(employee.vacation_days(), 4);
    }

    #[test]
    fn payout_deducts_fixed_block() {
        let mut employee = SalariedEmployee::new("Louis", Role::Manager).with_vacation_days(7);

        assert_eq!(employee.payout_a_holiday().unwrap(), 2);
        assert_eq!(employee.vacation_days(), 2);
    }

    #[test]
    fn payout_of_exact_balance_leaves_zero() {
        let mut employee = HourlyEmployee::new("Tim", Role::Intern).with_vacation_days(5);
        assert_eq!(employee.payout_a_holiday().unwrap(), 0);
    }

    #[test]
    fn vacation_through_company_handle() {
        let mut company = sample_company();

        let employee = company.employee_mut(0).unwrap();
        employee.take_a_holiday().unwrap();
        employee.payout_a_holiday().unwrap();

        assert_eq!(company.employee(0).unwrap().vacation_days(), 19);
        assert_eq!(company.employee(1).unwrap().vacation_days(), 25);
    }

    // ========================================================================
    // Registry Tests
    // ========================================================================

    #[test]
    fn register_known_model() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle_model_info(VehicleModelInfo::new("Tesla", "Model 3", 50000));
        let mut rng = StdRng::seed_from_u64(1);

        let vehicle = registry
            .register_vehicle_with(&mut rng, "Tesla", "Model 3")
            .unwrap();

        let stored = registry.find_model_info("Tesla", "Model 3").unwrap();
        assert_eq!(vehicle.info(), &**stored);
        assert!(vehicle.shares_info(stored));

        let id = vehicle.vehicle_id();
        assert_eq!(id.len(), VEHICLE_ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_uppercase()));

        let plate: Vec<char> = vehicle.license_plate().chars().collect();
        assert_eq!(plate.len(), 8);
        assert_eq!(&vehicle.license_plate()[..2], &id[..2]);
        assert_eq!(plate[2], '-');
        assert!(plate[3].is_ascii_digit() && plate[4].is_ascii_digit());
        assert_eq!(plate[5], '-');
        assert!(plate[6].is_ascii_uppercase() && plate[7].is_ascii_uppercase());
    }

    #[test]
    fn register_with_thread_rng() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle_model_info(VehicleModelInfo::new("Volkswagen", "ID3", 35000));

        let vehicle = registry.register_vehicle("Volkswagen", "ID3").unwrap();
        assert_eq!(vehicle.info().brand, "Volkswagen");
    }

    #[test]
    fn register_unknown_model_fails() {
        let registry = VehicleRegistry::new();

        let err = registry.register_vehicle("Ford", "Focus").unwrap_err();

        assert_eq!(err.brand, "Ford");
        assert_eq!(err.model, "Focus");
    }

    #[test]
    fn lookup_is_exact_and_idempotent() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle_model_info(VehicleModelInfo::new("Tesla", "Model Y", 55000));

        let first = registry.find_model_info("Tesla", "Model Y").cloned();
        let second = registry.find_model_info("Tesla", "Model Y").cloned();

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert!(registry.find_model_info("tesla", "Model Y").is_none());
        assert!(registry.find_model_info("Tesla", "Model 3").is_none());
    }

    #[test]
    fn re_adding_a_model_overwrites() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle_model_info(VehicleModelInfo::new("BMW", "520e", 60000));
        registry.add_vehicle_model_info(
            VehicleModelInfo::new("BMW", "520e", 62000).with_fuel_type(FuelType::Petrol),
        );

        assert_eq!(registry.len(), 1);
        let info = registry.find_model_info("BMW", "520e").unwrap();
        assert_eq!(info.catalogue_price, 62000);
        assert_eq!(info.fuel_type, FuelType::Petrol);
    }

    #[test]
    fn online_status_truth_table() {
        let mut registry = VehicleRegistry::new();
        assert_eq!(registry.online_status(), RegistryStatus::ConnectionError);

        registry.add_vehicle_model_info(VehicleModelInfo::new("Tesla", "Model 3", 50000));
        assert_eq!(registry.online_status(), RegistryStatus::Online);

        registry.set_online(false);
        assert_eq!(registry.online_status(), RegistryStatus::Offline);

        let mut empty_offline = VehicleRegistry::new();
        empty_offline.set_online(false);
        assert_eq!(empty_offline.online_status(), RegistryStatus::Offline);
    }

    #[test]
    fn model_info_tax_and_display() {
        let info = VehicleModelInfo::new("BMW", "520e", 60000).with_fuel_type(FuelType::Petrol);

        assert_eq!(info.tax(), Decimal::new(3000, 0));
        assert_eq!(info.to_string(), "brand: BMW - type: 520e - tax: 3000.00");
    }

    #[test]
    fn vehicle_display_includes_info() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle_model_info(VehicleModelInfo::new("Volkswagen", "ID3", 35000));

        let vehicle = registry
            .register_vehicle_with(&mut StdRng::seed_from_u64(9), "Volkswagen", "ID3")
            .unwrap();
        let text = vehicle.to_string();

        assert!(text.starts_with(&format!("Id: {}.", vehicle.vehicle_id())));
        assert!(text.ends_with("Info: brand: Volkswagen - type: ID3 - tax: 700.00."));
    }

    #[test]
    fn production_year_defaults_to_current_year() {
        use chrono::Datelike;

        let info = VehicleModelInfo::new("Tesla", "Model 3", 50000);
        assert_eq!(info.production_year, chrono::Local::now().year());
        assert_eq!(info.with_production_year(2020).production_year, 2020);
    }

    #[test]
    fn models_iterate_by_brand_then_model() {
        let mut registry = VehicleRegistry::new();
        registry.add_vehicle_model_info(VehicleModelInfo::new("Tesla", "Model Y", 55000));
        registry.add_vehicle_model_info(VehicleModelInfo::new("BMW", "520e", 60000));
        registry.add_vehicle_model_info(VehicleModelInfo::new("Tesla", "Model 3", 50000));

        let keys: Vec<_> = registry.models().map(|info| info.key()).collect();
        assert_eq!(
            keys,
            [("BMW", "520e"), ("Tesla", "Model 3"), ("Tesla", "Model Y")]
        );

        assert!(registry.is_online());
        registry.set_online(false);
        assert!(!registry.is_online());
    }
}

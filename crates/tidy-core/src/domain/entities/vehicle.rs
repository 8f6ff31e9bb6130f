//! Vehicle catalog entries and issued vehicles.

use std::{fmt, sync::Arc};

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::value_objects::FuelType;

/// Basic information about a vehicle model, as listed in a registry catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VehicleModelInfo {
    pub brand: String,
    pub model: String,
    pub catalogue_price: u32,
    pub fuel_type: FuelType,
    pub production_year: i32,
}

impl VehicleModelInfo {
    /// Electric model produced this year.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, catalogue_price: u32) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            catalogue_price,
            fuel_type: FuelType::default(),
            production_year: chrono::Local::now().year(),
        }
    }

    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = fuel_type;
        self
    }

    pub fn with_production_year(mut self, year: i32) -> Self {
        self.production_year = year;
        self
    }

    /// Tax paid when registering a vehicle of this model.
    pub fn tax(&self) -> Decimal {
        self.fuel_type.tax_rate() * Decimal::from(self.catalogue_price)
    }

    /// Catalog key.
    pub fn key(&self) -> (&str, &str) {
        (&self.brand, &self.model)
    }
}

impl fmt::Display for VehicleModelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "brand: {} - type: {} - tax: {}",
            self.brand,
            self.model,
            self.tax()
        )
    }
}

/// A registered vehicle. `info` is shared with the registry catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    vehicle_id: String,
    license_plate: String,
    info: Arc<VehicleModelInfo>,
}

impl Vehicle {
    pub(crate) fn new(
        vehicle_id: String,
        license_plate: String,
        info: Arc<VehicleModelInfo>,
    ) -> Self {
        Self {
            vehicle_id,
            license_plate,
            info,
        }
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn info(&self) -> &VehicleModelInfo {
        &self.info
    }

    /// Whether this vehicle refers to the very same catalog entry.
    pub fn shares_info(&self, info: &Arc<VehicleModelInfo>) -> bool {
        Arc::ptr_eq(&self.info, info)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}. License plate: {}. Info: {}.",
            self.vehicle_id, self.license_plate, self.info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_serializes_with_inline_info() {
        let info = Arc::new(
            VehicleModelInfo::new("BMW", "520e", 60000)
                .with_fuel_type(FuelType::Petrol)
                .with_production_year(2021),
        );
        let vehicle = Vehicle::new("ABCDEFGHIJKL".into(), "AB-12-CD".into(), Arc::clone(&info));

        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["vehicle_id"], "ABCDEFGHIJKL");
        assert_eq!(json["info"]["fuel_type"], "petrol");
        assert_eq!(json["info"]["production_year"], 2021);
        assert!(vehicle.shares_info(&info));
    }
}

//! In-memory vehicle registry.

use std::{collections::BTreeMap, sync::Arc};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::domain::{
    entities::vehicle::{Vehicle, VehicleModelInfo},
    error::VehicleInfoMissingError,
    identifiers::{VEHICLE_ID_LENGTH, generate_vehicle_id, generate_vehicle_license},
    value_objects::RegistryStatus,
};

type ModelKey = (String, String);

/// Catalog of vehicle models keyed by (brand, model), plus an online flag.
#[derive(Debug, Clone)]
pub struct VehicleRegistry {
    vehicle_models: BTreeMap<ModelKey, Arc<VehicleModelInfo>>,
    online: bool,
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleRegistry {
    /// Empty catalog, online.
    pub fn new() -> Self {
        Self {
            vehicle_models: BTreeMap::new(),
            online: true,
        }
    }

    /// Store a catalog entry. An existing entry with the same brand and
    /// model is replaced.
    pub fn add_vehicle_model_info(&mut self, model_info: VehicleModelInfo) {
        let (brand, model) = model_info.key();
        let key = (brand.to_owned(), model.to_owned());
        if let Some(previous) = self.vehicle_models.insert(key, Arc::new(model_info)) {
            warn!(
                brand = %previous.brand,
                model = %previous.model,
                "Catalog entry replaced"
            );
        }
    }

    /// Exact lookup. `None` when the pair is not in the catalog.
    pub fn find_model_info(&self, brand: &str, model: &str) -> Option<&Arc<VehicleModelInfo>> {
        let found = self
            .vehicle_models
            .get(&(brand.to_owned(), model.to_owned()));
        debug!(brand, model, found = found.is_some(), "Catalog lookup");
        found
    }

    /// Register a vehicle using the thread-local random generator.
    pub fn register_vehicle(
        &self,
        brand: &str,
        model: &str,
    ) -> Result<Vehicle, VehicleInfoMissingError> {
        self.register_vehicle_with(&mut rand::rng(), brand, model)
    }

    /// Register a vehicle, drawing the id and plate from `rng`.
    pub fn register_vehicle_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        brand: &str,
        model: &str,
    ) -> Result<Vehicle, VehicleInfoMissingError> {
        let Some(info) = self.find_model_info(brand, model) else {
            return Err(VehicleInfoMissingError::new(brand, model));
        };

        let vehicle_id = generate_vehicle_id(rng, VEHICLE_ID_LENGTH);
        let license_plate = generate_vehicle_license(rng, &vehicle_id);
        info!(%vehicle_id, %license_plate, brand, model, "Vehicle registered");

        Ok(Vehicle::new(vehicle_id, license_plate, Arc::clone(info)))
    }

    pub fn online_status(&self) -> RegistryStatus {
        if !self.online {
            return RegistryStatus::Offline;
        }
        if self.vehicle_models.is_empty() {
            return RegistryStatus::ConnectionError;
        }
        RegistryStatus::Online
    }

    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Catalog entries ordered by brand, then model.
    pub fn models(&self) -> impl Iterator<Item = &Arc<VehicleModelInfo>> {
        self.vehicle_models.values()
    }

    pub fn len(&self) -> usize {
        self.vehicle_models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicle_models.is_empty()
    }
}

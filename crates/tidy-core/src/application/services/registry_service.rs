//! Registry Service - vehicle catalog and registration use cases.

use rand::Rng;
use tracing::{info, instrument};

use crate::{
    application::ports::ReportSink,
    domain::{RegistryStatus, Vehicle, VehicleModelInfo, VehicleRegistry},
    error::TidyResult,
};

/// Service for registry operations.
pub struct RegistryService {
    registry: VehicleRegistry,
    sink: Box<dyn ReportSink>,
}

impl RegistryService {
    /// Create a service around an empty, online registry.
    pub fn new(sink: Box<dyn ReportSink>) -> Self {
        Self::with_registry(VehicleRegistry::new(), sink)
    }

    pub fn with_registry(registry: VehicleRegistry, sink: Box<dyn ReportSink>) -> Self {
        Self { registry, sink }
    }

    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }

    /// Add (or replace) a catalog entry.
    pub fn add_model(&mut self, info: VehicleModelInfo) {
        self.registry.add_vehicle_model_info(info);
    }

    pub fn set_online(&mut self, online: bool) {
        info!(online, "Registry connectivity changed");
        self.registry.set_online(online);
    }

    /// Emit and return the current status.
    #[instrument(skip(self))]
    pub fn report_status(&self) -> TidyResult<RegistryStatus> {
        let status = self.registry.online_status();
        self.sink.emit(&format!("Registry status: {status}"))?;
        Ok(status)
    }

    /// Register a vehicle with the thread-local generator.
    pub fn register(&self, brand: &str, model: &str) -> TidyResult<Vehicle> {
        self.register_with(&mut rand::rng(), brand, model)
    }

    /// Register a vehicle, drawing id and plate from `rng`, and emit its
    /// description.
    #[instrument(skip(self, rng))]
    pub fn register_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        brand: &str,
        model: &str,
    ) -> TidyResult<Vehicle> {
        let vehicle = self.registry.register_vehicle_with(rng, brand, model)?;
        self.sink.emit(&vehicle.to_string())?;
        Ok(vehicle)
    }
}

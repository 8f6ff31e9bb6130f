//! `tidy registry`: register a vehicle against the sample catalog.

use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{info, instrument};

use tidy_core::application::RegistryService;
use tidy_core::domain::{FuelType, RegistryStatus, Vehicle, VehicleModelInfo, VehicleRegistry};

use super::{Transcript, transcribed};
use crate::{cli::RegistryArgs, config::AppConfig, error::CliResult, output::OutputManager};

const DEFAULT_BRAND: &str = "Volkswagen";
const DEFAULT_MODEL: &str = "ID3";

/// Machine-readable result of a registry run.
#[derive(Debug, Serialize)]
pub struct RegistryReport {
    pub status: RegistryStatus,
    pub vehicle: Vehicle,
    pub lines: Vec<String>,
}

pub fn execute(args: RegistryArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let report = transcribed(output, |transcript| run(args, config, output, transcript))?;
    if output.is_json() {
        output.json(&report)?;
    }
    Ok(())
}

/// Report status, then register one vehicle.
#[instrument(skip_all)]
pub fn run(
    args: RegistryArgs,
    config: &AppConfig,
    output: &OutputManager,
    transcript: &Transcript,
) -> CliResult<RegistryReport> {
    let mut service = RegistryService::with_registry(sample_catalog(), transcript.sink());

    output.header("Vehicle registry")?;
    service.set_online(config.registry.start_online && !args.offline);
    let status = service.report_status()?;

    let (brand, model) = match (args.brand, args.model) {
        (Some(brand), Some(model)) => (brand, model),
        _ => (DEFAULT_BRAND.to_owned(), DEFAULT_MODEL.to_owned()),
    };

    let vehicle = match args.seed.or(config.registry.seed) {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            service.register_with(&mut rng, &brand, &model)?
        }
        None => service.register(&brand, &model)?,
    };

    info!(id = vehicle.vehicle_id(), plate = vehicle.license_plate(), "Vehicle registered");
    output.success(&format!("Registered {brand} {model}"))?;

    Ok(RegistryReport {
        status,
        vehicle,
        lines: transcript.lines(),
    })
}

fn sample_catalog() -> VehicleRegistry {
    let mut registry = VehicleRegistry::new();
    registry.add_vehicle_model_info(VehicleModelInfo::new("Tesla", "Model 3", 50000));
    registry.add_vehicle_model_info(VehicleModelInfo::new("Volkswagen", "ID3", 35000));
    registry.add_vehicle_model_info(
        VehicleModelInfo::new("BMW", "520e", 60000).with_fuel_type(FuelType::Petrol),
    );
    registry.add_vehicle_model_info(VehicleModelInfo::new("Tesla", "Model Y", 55000));
    registry
}

//! `tidy demo`: payroll then registry, with their defaults.

use serde::Serialize;

use super::{payroll, registry, transcribed};
use crate::{
    cli::{PayrollArgs, RegistryArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct DemoReport {
    payroll: payroll::PayrollReport,
    registry: registry::RegistryReport,
}

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let payroll = transcribed(output, |transcript| {
        payroll::run(PayrollArgs::default(), config, output, transcript)
    })?;
    output.print("")?;
    let registry = transcribed(output, |transcript| {
        registry::run(RegistryArgs::default(), config, output, transcript)
    })?;

    if output.is_json() {
        output.json(&DemoReport { payroll, registry })?;
    }
    Ok(())
}

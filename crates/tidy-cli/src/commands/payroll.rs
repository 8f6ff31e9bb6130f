//! `tidy payroll`: pay and manage the sample company.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use tidy_core::application::PayrollService;
use tidy_core::domain::{
    Company, EmployeeProfile, HourlyEmployee, Role, SalariedEmployee,
};

use super::{Transcript, transcribed};
use crate::{
    cli::PayrollArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Position of the employee whose vacation days are spent.
const HOLIDAY_EMPLOYEE: usize = 0;

/// Machine-readable result of a payroll run.
#[derive(Debug, Serialize)]
pub struct PayrollReport {
    pub role: Role,
    pub paid: usize,
    pub lines: Vec<String>,
    pub employees: Vec<EmployeeProfile>,
}

pub fn execute(args: PayrollArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let report = transcribed(output, |transcript| run(args, config, output, transcript))?;
    if output.is_json() {
        output.json(&report)?;
    }
    Ok(())
}

/// Run the payroll steps, streaming or capturing their lines.
#[instrument(skip_all)]
pub fn run(
    args: PayrollArgs,
    config: &AppConfig,
    output: &OutputManager,
    transcript: &Transcript,
) -> CliResult<PayrollReport> {
    let role = match args.role {
        Some(role) => role.into(),
        None => default_role(config)?,
    };

    let mut service = PayrollService::with_company(sample_company(), transcript.sink());

    output.header("Payroll")?;
    for listed in [Role::VicePresident, Role::Manager, Role::Intern] {
        service.roster(listed)?;
    }

    let paid = service.pay_role(role)?;
    if paid == 0 {
        output.warning(&format!("No employees with role {role}"))?;
    }

    for _ in 0..args.holidays {
        service.take_a_holiday(HOLIDAY_EMPLOYEE)?;
    }
    if args.payout {
        service.payout_a_holiday(HOLIDAY_EMPLOYEE)?;
    }

    info!(%role, paid, holidays = args.holidays, payout = args.payout, "Payroll finished");
    output.success(&format!("Paid {paid} {role} employee(s)"))?;

    Ok(PayrollReport {
        role,
        paid,
        lines: transcript.lines(),
        employees: service
            .company()
            .employees()
            .iter()
            .map(|e| e.profile().clone())
            .collect(),
    })
}

fn default_role(config: &AppConfig) -> CliResult<Role> {
    config
        .payroll
        .default_role
        .parse()
        .map_err(|e| CliError::ConfigError {
            message: format!("payroll.default_role: {e}"),
            source: Some(Box::new(e)),
        })
}

fn sample_company() -> Company {
    let mut company = Company::new();
    company.add_employee(SalariedEmployee::new("Louis", Role::Manager));
    company.add_employee(
        HourlyEmployee::new("Brenda", Role::President)
            .with_hourly_rate(Decimal::from(50))
            .with_hours_worked(100),
    );
    company.add_employee(
        HourlyEmployee::new("Tim", Role::Intern)
            .with_hourly_rate(Decimal::from(10))
            .with_hours_worked(1000),
    );
    company.add_employee(
        SalariedEmployee::new("Anna", Role::VicePresident).with_monthly_salary(Decimal::from(7000)),
    );
    company
}

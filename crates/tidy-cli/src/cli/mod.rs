//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::fmt;

use clap::{Args, Parser, Subcommand, ValueEnum};

use tidy_core::domain::Role as CoreRole;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tidy",
    bin_name = "tidy",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Refactored payroll and vehicle registry demos",
    long_about = "tidy runs two small in-memory models: a company payroll \
                  (roles, pay, vacation days) and a vehicle registry \
                  (catalog lookup, id and license plate generation).",
    after_help = "EXAMPLES:\n\
        \x20 tidy payroll --role manager --holidays 2\n\
        \x20 tidy registry --brand Tesla --model \"Model 3\" --seed 7\n\
        \x20 tidy demo\n\
        \x20 tidy completions bash > /usr/share/bash-completion/completions/tidy",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the payroll demo.
    #[command(
        visible_alias = "pay",
        about = "Run the payroll demo",
        after_help = "EXAMPLES:\n\
            \x20 tidy payroll\n\
            \x20 tidy payroll --role intern\n\
            \x20 tidy payroll --holidays 3 --payout"
    )]
    Payroll(PayrollArgs),

    /// Run the vehicle registry demo.
    #[command(
        visible_alias = "reg",
        about = "Run the vehicle registry demo",
        after_help = "EXAMPLES:\n\
            \x20 tidy registry\n\
            \x20 tidy registry --brand BMW --model 520e\n\
            \x20 tidy registry --offline --seed 42"
    )]
    Registry(RegistryArgs),

    /// Run both demos with their defaults.
    #[command(about = "Run the payroll and registry demos")]
    Demo,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tidy completions bash > ~/.local/share/bash-completion/completions/tidy\n\
            \x20 tidy completions zsh  > ~/.zfunc/_tidy\n\
            \x20 tidy completions fish > ~/.config/fish/completions/tidy.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the tidy configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tidy config get registry.seed\n\
            \x20 tidy config list\n\
            \x20 tidy config path"
    )]
    Config(ConfigCommands),
}

// ── payroll ───────────────────────────────────────────────────────────────────

/// Arguments for `tidy payroll`.
#[derive(Debug, Args)]
pub struct PayrollArgs {
    /// Role whose employees get paid. Defaults to `payroll.default_role`.
    #[arg(short = 'r', long = "role", value_enum, help = "Role to pay")]
    pub role: Option<Role>,

    /// Single days off taken by the first employee.
    #[arg(
        long = "holidays",
        value_name = "DAYS",
        default_value_t = 1,
        help = "Days off taken by the first employee"
    )]
    pub holidays: u32,

    /// Also cash out a fixed block of vacation days.
    #[arg(long = "payout", help = "Pay out a block of vacation days")]
    pub payout: bool,
}

impl Default for PayrollArgs {
    fn default() -> Self {
        Self {
            role: None,
            holidays: 1,
            payout: false,
        }
    }
}

// ── registry ──────────────────────────────────────────────────────────────────

/// Arguments for `tidy registry`.
#[derive(Debug, Default, Args)]
pub struct RegistryArgs {
    /// Brand of the vehicle to register.
    #[arg(
        short = 'b',
        long = "brand",
        value_name = "BRAND",
        requires = "model",
        help = "Brand to register (default: Volkswagen)"
    )]
    pub brand: Option<String>,

    /// Model of the vehicle to register.
    #[arg(
        short = 'm',
        long = "model",
        value_name = "MODEL",
        requires = "brand",
        help = "Model to register (default: ID3)"
    )]
    pub model: Option<String>,

    /// Start the registry offline.
    #[arg(long = "offline", help = "Take the registry offline")]
    pub offline: bool,

    /// Seed for reproducible ids and plates. Defaults to `registry.seed`.
    #[arg(long = "seed", value_name = "N", help = "Random seed for id generation")]
    pub seed: Option<u64>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tidy completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tidy config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `registry.seed`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Employee roles accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Role {
    President,
    /// Also accepted as `vp`.
    #[value(alias = "vp")]
    VicePresident,
    Manager,
    Lead,
    Worker,
    Intern,
}

impl From<Role> for CoreRole {
    fn from(role: Role) -> Self {
        match role {
            Role::President => CoreRole::President,
            Role::VicePresident => CoreRole::VicePresident,
            Role::Manager => CoreRole::Manager,
            Role::Lead => CoreRole::Lead,
            Role::Worker => CoreRole::Worker,
            Role::Intern => CoreRole::Intern,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&CoreRole::from(*self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn role_display_matches_core() {
        assert_eq!(Role::VicePresident.to_string(), "vicepresident");
        assert_eq!(Role::Intern.to_string(), "intern");
    }

    #[test]
    fn parse_payroll_command() {
        let cli = Cli::parse_from(["tidy", "payroll", "--role", "intern", "--payout"]);
        if let Commands::Payroll(args) = cli.command {
            assert_eq!(args.role, Some(Role::Intern));
            assert_eq!(args.holidays, 1);
            assert!(args.payout);
        } else {
            panic!("expected Payroll command");
        }
    }

    #[test]
    fn vp_alias() {
        let cli = Cli::parse_from(["tidy", "pay", "-r", "vp"]);
        if let Commands::Payroll(args) = cli.command {
            assert_eq!(args.role, Some(Role::VicePresident));
        } else {
            panic!("expected Payroll command");
        }
    }

    #[test]
    fn parse_registry_command() {
        let cli = Cli::parse_from([
            "tidy", "registry", "--brand", "Tesla", "--model", "Model 3", "--seed", "7",
        ]);
        if let Commands::Registry(args) = cli.command {
            assert_eq!(args.brand.as_deref(), Some("Tesla"));
            assert_eq!(args.model.as_deref(), Some("Model 3"));
            assert_eq!(args.seed, Some(7));
            assert!(!args.offline);
        } else {
            panic!("expected Registry command");
        }
    }

    #[test]
    fn brand_requires_model() {
        let result = Cli::try_parse_from(["tidy", "registry", "--brand", "Tesla"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_color_env_accepts_any_truthy_value() {
        // SAFETY: std serialises env access behind its own lock and no
        // foreign code reads the environment in this test binary.
        unsafe { std::env::set_var("NO_COLOR", "1") };
        let cli = Cli::try_parse_from(["tidy", "demo"]);
        unsafe { std::env::remove_var("NO_COLOR") };

        assert!(cli.expect("NO_COLOR=1 must parse").global.no_color);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["tidy", "-q", "-v", "demo"]);
        assert!(result.is_err());
    }
}

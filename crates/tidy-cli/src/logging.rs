//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `tidy-core` and `tidy-adapters`
//! just emit spans and events. Without `RUST_LOG`, the level comes from
//! [`GlobalArgs::log_level`] and applies to every tidy crate.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const TIDY_TARGETS: [&str; 3] = ["tidy", "tidy_core", "tidy_adapters"];

/// Install the global subscriber. Events go to stderr so stdout carries
/// only results.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(args.log_level())));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn default_directives(level: &str) -> String {
    TIDY_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

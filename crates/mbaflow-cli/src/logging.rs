//! Logging setup for the `mbaflow` binary.
//!
//! Events from all three crates go to stderr. `--quiet` narrows the filter
//! to errors; otherwise each `-v` widens it one step from `warn`.
//! A set `RUST_LOG` replaces the computed filter entirely.

use std::io::{self, IsTerminal as _};

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown.
const LOG_TARGETS: [&str; 3] = ["mbaflow", "mbaflow_core", "mbaflow_adapters"];

/// Level per `-v` count; anything past the end stays at `trace`.
const VERBOSITY_LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .context("tracing subscriber already installed")
}

fn level_for(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    let step = usize::from(args.verbose).min(VERBOSITY_LEVELS.len() - 1);
    VERBOSITY_LEVELS[step]
}

fn directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

//! Tracing subscriber setup for the `hireform` binary.
//!
//! The library crates only emit events. This module decides which of them
//! reach stderr:
//!
//! | Flags      | Level |
//! |------------|-------|
//! | `--quiet`  | ERROR |
//! | (none)     | WARN  |
//! | `-v`       | INFO  |
//! | `-vv`      | DEBUG |
//! | `-vvv`     | TRACE |
//!
//! A set `RUST_LOG` replaces the whole table.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Workspace crates that share the verbosity level.
const TARGETS: [&str; 3] = ["hireform_cli", "hireform_core", "hireform_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    // Prompts and logs share the terminal during `fill`, so events stay on
    // stderr and only carry their target once the user asks for debug output.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(level >= LevelFilter::DEBUG)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn filter_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

//! # hireform
//!
//! Terminal front-end for the job application form in `hireform-core`.
//!
//! `main` reads `.env`, parses flags, installs logging, loads configuration
//! and hands off to a command. Every failure after parsing comes back as a
//! [`CliError`] and is printed once, on stderr, by [`report`].
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success, or an accepted application       |
//! |  1   | Internal / system error                   |
//! |  2   | Bad input or a rejected application       |
//! |  3   | Script or snapshot not found              |
//! |  4   | Configuration error                       |

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("hireform: {e:#}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.is_verbose();
    let colour = !cli.global.no_color && std::io::stderr().is_terminal();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, verbose, colour),
    }
}

fn try_main(cli: Cli) -> CliResult<()> {
    debug!(command = ?cli.command, "hireform starting");

    let config =
        AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        })?;
    let output = OutputManager::new(&cli.global, &config);

    run(cli.command, config, output)
}

#[instrument(skip_all)]
fn run(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::Fill(args) => commands::fill::execute(args, config, output),
        Commands::Replay(args) => commands::replay::execute(args, config, output),
        Commands::Validate(args) => commands::validate::execute(args, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Print `err` on stderr and pick the exit code.
fn report(err: &CliError, verbose: bool, colour: bool) -> ExitCode {
    err.log();

    eprint!("{}", err.render(verbose, colour));

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(
            Cli::command().get_version(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn every_subcommand_has_about_text() {
        for sub in Cli::command().get_subcommands() {
            assert!(sub.get_about().is_some(), "{} has no about", sub.get_name());
        }
    }
}

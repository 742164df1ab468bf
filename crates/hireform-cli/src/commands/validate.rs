//! `hireform validate`: run the validator over a saved application.

use tracing::{info, instrument};

use hireform_adapters::SnapshotLoader;
use hireform_core::{
    application::ApplicationError,
    domain::{ErrorMap, validate},
    error::HireformError,
};

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Print every error in the snapshot; fail with exit code 2 if there is any.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let data = SnapshotLoader::new(&args.file).load()?;
    let errors = validate(&data);
    info!(error_count = errors.len(), "Snapshot validated");

    if args.json || output.is_json() {
        output.data(&to_json(&errors)?)?;
    } else if errors.is_empty() {
        output.success("Application is valid")?;
    } else {
        for (field, message) in errors.iter() {
            output.error(&format!("{field}: {message}"))?;
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidApplication {
            count: errors.len(),
        })
    }
}

fn to_json(errors: &ErrorMap) -> CliResult<String> {
    serde_json::to_string_pretty(errors).map_err(|e| {
        CliError::Core(HireformError::from(ApplicationError::RenderingFailed {
            reason: e.to_string(),
        }))
    })
}

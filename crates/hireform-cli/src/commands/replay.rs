//! `hireform replay`: drive the form from an event script.

use tracing::instrument;

use hireform_adapters::{JsonRenderer, ScriptSource, TextRenderer};
use hireform_core::application::{SessionService, SubmitOutcome, ports::FormRenderer};

use crate::{
    cli::ReplayArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(script = %args.script.display()))]
pub fn execute(args: ReplayArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let json = output.is_json();
    let renderer: Box<dyn FormRenderer> = if json {
        Box::new(JsonRenderer::new())
    } else {
        Box::new(TextRenderer::new())
    };

    let mut service = SessionService::new(
        Box::new(ScriptSource::new(&args.script)),
        renderer,
        config.view_options(args.title.as_deref()),
    );
    let report = service.replay()?;

    output.data(&report.rendered)?;
    if json {
        return Ok(());
    }

    output.print("")?;
    output.info(&format!(
        "{} event(s) applied, {} submit(s), {} accepted",
        report.events_applied, report.submits, report.accepted
    ))?;
    match &report.last_outcome {
        Some(SubmitOutcome::Accepted) => output.success("Last submit was accepted")?,
        Some(SubmitOutcome::Rejected { errors }) => {
            output.warning(&format!("Last submit was rejected with {} error(s)", errors.len()))?
        }
        None => output.warning("The script never submitted the form")?,
    }

    Ok(())
}

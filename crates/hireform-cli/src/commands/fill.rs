//! `hireform fill`: fill in the form interactively.
//!
//! The prompt loop is written against the [`Prompter`] trait so it can be
//! driven by `dialoguer` on a terminal and by a scripted prompter in tests.

#![cfg_attr(not(feature = "interactive"), allow(dead_code, unused_imports))]

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use tracing::{debug, info, instrument};

use hireform_core::{
    application::{ApplicationForm, SubmitOutcome},
    domain::{FieldChange, FieldName, InputKind, Position, Skill},
};

use crate::{
    cli::FillArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// What a `datetime-local` input produces.
pub const INTERVIEW_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const SELECT_PLACEHOLDER: &str = "Select Position";

/// Accept what a `datetime-local` input can hold: nothing, or `YYYY-MM-DDTHH:MM`.
pub fn check_interview_time(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    // chrono accepts single-digit fields; the input element never emits them.
    let well_formed = value.len() == "2024-01-01T10:00".len()
        && NaiveDateTime::parse_from_str(value, INTERVIEW_TIME_FORMAT).is_ok();
    if well_formed {
        Ok(())
    } else {
        Err("Use the form YYYY-MM-DDTHH:MM, e.g. 2024-05-01T09:30".to_string())
    }
}

/// One question at a time, answered by whoever is at the keyboard.
pub trait Prompter {
    /// Free text (text, number and date-time inputs).
    fn input(&mut self, label: &str, initial: &str, kind: InputKind) -> CliResult<String>;

    /// Pick one item; returns its index.
    fn choose(&mut self, label: &str, items: &[&str], selected: usize) -> CliResult<usize>;

    /// Toggle a set of checkboxes; returns the new state of each.
    fn toggle(&mut self, label: &str, items: &[&str], checked: &[bool]) -> CliResult<Vec<bool>>;
}

#[instrument(skip_all)]
pub fn execute(args: FillArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;

        if !std::io::stdin().is_terminal() || !console::Term::stderr().is_term() {
            return Err(CliError::InvalidInput {
                message: "fill needs an interactive terminal; use 'hireform replay SCRIPT' instead"
                    .into(),
                source: None,
            });
        }

        let mut form = ApplicationForm::with_options(config.view_options(args.title.as_deref()));
        output.header(&form.options().title)?;

        let mut prompter = terminal::DialoguerPrompter::new();
        let attempts = fill_until_accepted(&mut form, &mut prompter, &output)?;
        info!(attempts, "Application accepted");

        print_summary(&form, &output)
    }

    #[cfg(not(feature = "interactive"))]
    {
        let _ = (args, config, output);
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Prompt, submit, and repeat until a submit is accepted. Returns the
/// number of submits it took.
pub fn fill_until_accepted<P: Prompter>(
    form: &mut ApplicationForm,
    prompter: &mut P,
    output: &OutputManager,
) -> CliResult<usize> {
    let mut asked = BTreeSet::new();
    let mut failing = BTreeSet::new();
    let mut attempts = 0;

    loop {
        prompt_pass(form, prompter, &mut asked, &failing)?;
        attempts += 1;

        match form.submit() {
            SubmitOutcome::Accepted => return Ok(attempts),
            SubmitOutcome::Rejected { errors } => {
                output.warning(&format!(
                    "{} field(s) need attention before the application can be submitted",
                    errors.len()
                ))?;
                for (field, message) in errors.iter() {
                    output.error(&format!("{}: {}", field.label(), message))?;
                }
                failing = errors.fields().collect();
            }
        }
    }
}

/// Ask every visible field that failed last time or was never asked, in
/// render order. The visible set is re-read after each answer, so a new
/// position's fields are picked up straight away. A failing field that is
/// hidden goes last; otherwise its error could never be fixed.
fn prompt_pass<P: Prompter>(
    form: &mut ApplicationForm,
    prompter: &mut P,
    asked: &mut BTreeSet<FieldName>,
    failing: &BTreeSet<FieldName>,
) -> CliResult<()> {
    let mut this_pass = BTreeSet::new();

    loop {
        let visible = FieldName::visible_for(form.data().position);
        let next = visible
            .iter()
            .copied()
            .find(|f| !this_pass.contains(f) && (failing.contains(f) || !asked.contains(f)))
            .or_else(|| failing.iter().copied().find(|f| !this_pass.contains(f)));

        let Some(field) = next else {
            return Ok(());
        };
        debug!(%field, "Prompting");
        prompt_field(form, prompter, field)?;
        this_pass.insert(field);
        asked.insert(field);
    }
}

fn prompt_field<P: Prompter>(
    form: &mut ApplicationForm,
    prompter: &mut P,
    field: FieldName,
) -> CliResult<()> {
    let label = field.label();

    match field.input_kind() {
        InputKind::Select => {
            let items: Vec<&str> = std::iter::once(SELECT_PLACEHOLDER)
                .chain(Position::ALL.iter().map(|p| p.as_str()))
                .collect();
            let selected = form
                .data()
                .position
                .and_then(|p| Position::ALL.iter().position(|q| *q == p))
                .map_or(0, |i| i + 1);

            let index = prompter.choose(label, &items, selected)?;
            let value = match index {
                0 => "",
                i => Position::ALL.get(i - 1).map_or("", |p| p.as_str()),
            };
            form.on_field_change(FieldChange::text(field, value))?;
        }
        InputKind::Checkboxes => {
            let items: Vec<&str> = Skill::ALL.iter().map(|s| s.as_str()).collect();
            let before: Vec<bool> = Skill::ALL.iter().map(|s| form.data().has_skill(*s)).collect();

            let after = prompter.toggle(label, &items, &before)?;
            for ((skill, was), now) in Skill::ALL.iter().zip(before).zip(after) {
                match (was, now) {
                    (false, true) => form.on_field_change(FieldChange::check(*skill))?,
                    (true, false) => form.on_field_change(FieldChange::uncheck(*skill))?,
                    _ => {}
                }
            }
        }
        kind @ (InputKind::Text | InputKind::Number | InputKind::DateTimeLocal) => {
            let initial = form.data().display_value(field, "");
            let value = prompter.input(label, &initial, kind)?;
            form.on_field_change(FieldChange::text(field, value))?;
        }
    }

    Ok(())
}

fn print_summary(form: &ApplicationForm, output: &OutputManager) -> CliResult<()> {
    use hireform_adapters::JsonRenderer;
    use hireform_core::application::ports::FormRenderer as _;

    let view = form.view();
    if output.is_json() {
        output.data(&JsonRenderer::new().render(&view)?)?;
        return Ok(());
    }

    let Some(summary) = view.summary else {
        return Ok(());
    };
    output.print("")?;
    output.success(&summary.heading)?;
    for line in &summary.lines {
        output.print(&format!("  {}: {}", line.label, line.value))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
mod terminal {
    use std::io;

    use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};

    use super::{Prompter, check_interview_time};
    use crate::error::{CliError, CliResult};
    use hireform_core::domain::InputKind;

    /// Terminal prompts backed by `dialoguer`.
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    /// Ctrl-C at a prompt surfaces as an interrupted read.
    fn prompt_failed(e: dialoguer::Error) -> CliError {
        match e {
            dialoguer::Error::IO(source) if source.kind() == io::ErrorKind::Interrupted => {
                CliError::Cancelled
            }
            dialoguer::Error::IO(source) => CliError::IoError {
                message: "prompt failed".into(),
                source,
            },
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(&mut self, label: &str, initial: &str, kind: InputKind) -> CliResult<String> {
            let mut input = Input::<String>::with_theme(&self.theme)
                .with_prompt(label)
                .allow_empty(true);
            if !initial.is_empty() {
                input = input.with_initial_text(initial);
            }
            if matches!(kind, InputKind::DateTimeLocal) {
                input = input.validate_with(|value: &String| check_interview_time(value));
            }
            input.interact_text().map_err(prompt_failed)
        }

        fn choose(&mut self, label: &str, items: &[&str], selected: usize) -> CliResult<usize> {
            Select::with_theme(&self.theme)
                .with_prompt(label)
                .items(items)
                .default(selected)
                .interact()
                .map_err(prompt_failed)
        }

        fn toggle(
            &mut self,
            label: &str,
            items: &[&str],
            checked: &[bool],
        ) -> CliResult<Vec<bool>> {
            let picked = MultiSelect::with_theme(&self.theme)
                .with_prompt(label)
                .items(items)
                .defaults(checked)
                .interact()
                .map_err(prompt_failed)?;
            Ok((0..items.len()).map(|i| picked.contains(&i)).collect())
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::cli::{GlobalArgs, OutputFormat};

    #[derive(Debug)]
    enum Answer {
        Text(&'static str),
        Choose(usize),
        Toggle([bool; 3]),
    }

    /// Replays canned answers and records which labels were asked.
    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<Answer>,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, label: &str) -> Answer {
            self.asked.push(label.to_string());
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("no answer left for '{label}'"))
        }
    }

    impl Prompter for Scripted {
        fn input(&mut self, label: &str, _initial: &str, _kind: InputKind) -> CliResult<String> {
            match self.next(label) {
                Answer::Text(v) => Ok(v.to_string()),
                other => panic!("'{label}' wants text, script has {other:?}"),
            }
        }

        fn choose(&mut self, label: &str, _items: &[&str], _selected: usize) -> CliResult<usize> {
            match self.next(label) {
                Answer::Choose(i) => Ok(i),
                other => panic!("'{label}' wants a choice, script has {other:?}"),
            }
        }

        fn toggle(&mut self, label: &str, _items: &[&str], _c: &[bool]) -> CliResult<Vec<bool>> {
            match self.next(label) {
                Answer::Toggle(state) => Ok(state.to_vec()),
                other => panic!("'{label}' wants checkboxes, script has {other:?}"),
            }
        }
    }

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn interview_time_must_look_like_datetime_local() {
        assert!(check_interview_time("").is_ok());
        assert!(check_interview_time("2024-05-01T09:30").is_ok());
        assert!(check_interview_time("2024-5-1T9:30").is_err());
        assert!(check_interview_time("2024-05-01 09:30").is_err());
        assert!(check_interview_time("2024-13-01T09:30").is_err());
        assert!(check_interview_time("tomorrow").is_err());
    }

    #[test]
    fn developer_happy_path_asks_revealed_field_after_position() {
        let mut form = ApplicationForm::new();
        let mut prompter = Scripted::new([
            Answer::Text("Ada Lovelace"),
            Answer::Text("ada@example.org"),
            Answer::Text("5550100"),
            Answer::Choose(1),
            Answer::Text("3"),
            Answer::Toggle([true, false, true]),
            Answer::Text("2024-05-01T09:30"),
        ]);

        let attempts = fill_until_accepted(&mut form, &mut prompter, &quiet_output()).unwrap();

        assert_eq!(attempts, 1);
        assert_eq!(
            prompter.asked,
            vec![
                "Full Name",
                "Email",
                "Phone Number",
                "Applying for Position",
                "Relevant Experience (years)",
                "Additional Skills",
                "Preferred Interview Time",
            ]
        );
        let submitted = form.submitted().unwrap();
        assert_eq!(submitted.position, Some(Position::Developer));
        assert_eq!(submitted.additional_skills, vec![Skill::JavaScript, Skill::Python]);
    }

    #[test]
    fn rejection_reprompts_only_failing_fields() {
        let mut form = ApplicationForm::new();
        let mut prompter = Scripted::new([
            Answer::Text(""),
            Answer::Text("not-an-email"),
            Answer::Text("5550100"),
            Answer::Choose(3),
            Answer::Text("4"),
            Answer::Toggle([false, true, false]),
            Answer::Text("2024-05-01T09:30"),
            // second pass
            Answer::Text("Grace Hopper"),
            Answer::Text("grace@navy.mil"),
        ]);

        let attempts = fill_until_accepted(&mut form, &mut prompter, &quiet_output()).unwrap();

        assert_eq!(attempts, 2);
        assert_eq!(&prompter.asked[7..], ["Full Name", "Email"]);
        assert_eq!(form.submitted().unwrap().full_name, "Grace Hopper");
    }

    #[test]
    fn choosing_a_position_on_retry_asks_its_fields() {
        let mut form = ApplicationForm::new();
        let mut prompter = Scripted::new([
            Answer::Text("Ada"),
            Answer::Text("ada@example.org"),
            Answer::Text("123"),
            Answer::Choose(0),
            Answer::Toggle([false, true, false]),
            Answer::Text("2024-01-01T10:00"),
            // second pass: only position failed
            Answer::Choose(2),
            Answer::Text("4"),
            Answer::Text("https://example.com/p"),
        ]);

        fill_until_accepted(&mut form, &mut prompter, &quiet_output()).unwrap();

        assert_eq!(
            &prompter.asked[6..],
            [
                "Applying for Position",
                "Relevant Experience (years)",
                "Portfolio URL"
            ]
        );
        let summary = form.view().summary.unwrap();
        assert_eq!(
            summary.line(FieldName::PortfolioUrl).unwrap().value,
            "https://example.com/p"
        );
    }

    #[test]
    fn hidden_failing_field_is_still_reprompted() {
        // A portfolio URL typed while the form said Designer stays stored
        // (and format-checked) after switching to Developer.
        let mut form = ApplicationForm::new();
        for (field, value) in [
            (FieldName::Position, "Designer"),
            (FieldName::PortfolioUrl, "not a url"),
            (FieldName::Position, "Developer"),
        ] {
            form.on_field_change(FieldChange::text(field, value)).unwrap();
        }

        let mut prompter = Scripted::new([
            Answer::Text("Ada"),
            Answer::Text("ada@example.org"),
            Answer::Text("123"),
            Answer::Choose(1),
            Answer::Text("4"),
            Answer::Toggle([true, false, false]),
            Answer::Text("2024-01-01T10:00"),
            // second pass: the hidden field
            Answer::Text(""),
        ]);

        let attempts = fill_until_accepted(&mut form, &mut prompter, &quiet_output()).unwrap();

        assert_eq!(attempts, 2);
        assert_eq!(prompter.asked.last().map(String::as_str), Some("Portfolio URL"));
        assert_eq!(form.submitted().unwrap().portfolio_url, "");
    }
}

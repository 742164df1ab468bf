//! Integration tests for hireform-core.

use hireform_core::{
    domain::{FieldValue, messages},
    error::HireformResult,
    prelude::*,
};

struct Events(Vec<FormEvent>);

impl EventSource for Events {
    fn events(&self) -> HireformResult<Vec<FormEvent>> {
        Ok(self.0.clone())
    }
}

/// Renders only the title and the summary lines.
struct SummaryOnly;

impl FormRenderer for SummaryOnly {
    fn render(&self, view: &FormView) -> HireformResult<String> {
        let mut out = view.title.clone();
        if let Some(summary) = &view.summary {
            for line in &summary.lines {
                out.push_str(&format!("\n{}={}", line.label, line.value));
            }
        }
        Ok(out)
    }
}

fn text(field: FieldName, value: &str) -> FormEvent {
    FieldChange::text(field, value).into()
}

fn developer_events() -> Vec<FormEvent> {
    vec![
        text(FieldName::FullName, "Ada Lovelace"),
        text(FieldName::Email, "ada@example.org"),
        text(FieldName::PhoneNumber, "5550100"),
        text(FieldName::Position, "Developer"),
        text(FieldName::RelevantExperience, "4"),
        FieldChange::check(Skill::Python).into(),
        FieldChange::check(Skill::JavaScript).into(),
        text(FieldName::InterviewTime, "2024-05-01T09:30"),
        FormEvent::Submit,
    ]
}

#[test]
fn developer_session_renders_summary_in_check_order() {
    let mut service = SessionService::new(
        Box::new(Events(developer_events())),
        Box::new(SummaryOnly),
        ViewOptions::default(),
    );

    let report = service.replay().unwrap();

    assert!(report.ended_accepted());
    assert_eq!(report.phase, FormPhase::Submitted);
    assert_eq!(report.events_applied, 9);
    assert!(report.rendered.starts_with("Job Application Form"));
    assert!(report.rendered.contains("Position=Developer"));
    assert!(report.rendered.contains("Relevant Experience=4"));
    assert!(report.rendered.contains("Additional Skills=Python, JavaScript"));
    assert!(!report.rendered.contains("Management Experience"));
}

#[test]
fn invalid_fields_reported_together_and_nothing_committed() {
    let mut form = ApplicationForm::new();
    form.on_field_change(FieldChange::text(FieldName::Email, "not-an-email"))
        .unwrap();
    form.on_field_change(FieldChange::text(FieldName::PhoneNumber, "12a"))
        .unwrap();
    form.on_field_change(FieldChange::text(FieldName::Position, "Designer"))
        .unwrap();
    form.on_field_change(FieldChange::text(FieldName::RelevantExperience, "0"))
        .unwrap();

    let SubmitOutcome::Rejected { errors } = form.submit() else {
        panic!("expected rejection");
    };

    assert_eq!(errors.get(FieldName::FullName), Some(messages::FULL_NAME_REQUIRED));
    assert_eq!(errors.get(FieldName::Email), Some(messages::EMAIL_INVALID));
    assert_eq!(errors.get(FieldName::PhoneNumber), Some(messages::PHONE_INVALID));
    assert_eq!(
        errors.get(FieldName::RelevantExperience),
        Some(messages::EXPERIENCE_NOT_POSITIVE)
    );
    assert_eq!(
        errors.get(FieldName::PortfolioUrl),
        Some(messages::PORTFOLIO_REQUIRED)
    );
    assert_eq!(errors.get(FieldName::ManagementExperience), None);
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.submitted().is_none());
}

#[test]
fn hidden_fields_drop_out_of_the_view_but_keep_their_values() {
    let mut form = ApplicationForm::new();
    form.on_field_change(FieldChange::text(FieldName::Position, "Manager"))
        .unwrap();
    form.on_field_change(FieldChange::text(FieldName::ManagementExperience, "7"))
        .unwrap();
    form.on_field_change(FieldChange::text(FieldName::Position, "Developer"))
        .unwrap();

    let view = form.view();
    assert!(
        view.groups
            .iter()
            .all(|g| g.field != FieldName::ManagementExperience)
    );
    assert!(
        view.groups
            .iter()
            .any(|g| g.field == FieldName::RelevantExperience)
    );
    assert_eq!(form.data().management_experience, "7");
}

#[test]
fn summary_stays_on_last_accepted_snapshot() {
    let mut form = ApplicationForm::new();
    for event in developer_events() {
        form.dispatch(event).unwrap();
    }
    form.on_field_change(FieldChange::text(FieldName::FullName, "Someone Else"))
        .unwrap();

    let summary = form.view().summary.unwrap();
    assert_eq!(
        summary.line(FieldName::FullName).map(|l| l.value.as_str()),
        Some("Ada Lovelace")
    );
    assert_eq!(form.data().full_name, "Someone Else");
}

#[test]
fn unknown_skill_is_rejected_without_touching_state() {
    let mut form = ApplicationForm::new();
    form.on_field_change(FieldChange::text(FieldName::FullName, "Ada"))
        .unwrap();

    let err = FieldChange::parse("additionalSkills", "Rust", Some(true)).unwrap_err();
    assert!(err.to_string().contains("Rust"));
    assert_eq!(form.data().full_name, "Ada");
}

#[test]
fn checkbox_group_reflects_checks_in_view() {
    let mut form = ApplicationForm::new();
    form.on_field_change(FieldChange::check(Skill::Css)).unwrap();
    form.on_field_change(FieldChange::check(Skill::Python)).unwrap();
    form.on_field_change(FieldChange::uncheck(Skill::Css)).unwrap();

    let group = form
        .view()
        .groups
        .into_iter()
        .find(|g| g.field == FieldName::AdditionalSkills)
        .unwrap();

    let FieldValue::Checkboxes { options } = group.value else {
        panic!("expected checkboxes");
    };
    let checked: Vec<_> = options
        .iter()
        .filter(|o| o.checked)
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(checked, ["Python"]);
}

#[test]
fn validate_is_pure() {
    let data = FormData::new();
    let first = validate(&data);
    let second = validate(&data);
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

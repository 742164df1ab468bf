//! Framework-neutral render model.
//!
//! A [`FormView`] is everything a renderer needs to draw the form: which
//! input groups are present, what they hold, which carry an error, and the
//! submitted summary if there is one. Renderers never look at
//! [`FormData`] directly, so the conditional-display rules live in one place.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{error_map::ErrorMap, form_data::FormData},
    value_objects::{FieldName, InputKind, Position, Skill},
};

pub const DEFAULT_TITLE: &str = "Job Application Form";
pub const DEFAULT_SKILL_SEPARATOR: &str = ", ";
pub const SUMMARY_HEADING: &str = "Form Submitted";

/// Presentation knobs that do not affect validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub title: String,
    pub skill_separator: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            skill_separator: DEFAULT_SKILL_SEPARATOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub title: String,
    pub groups: Vec<FieldGroup>,
    pub summary: Option<SummaryView>,
}

/// One labelled input with its optional inline error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldGroup {
    pub field: FieldName,
    pub label: String,
    pub input: InputKind,
    pub value: FieldValue,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FieldValue {
    Text { value: String },
    Select { selected: String, options: Vec<SelectOption> },
    Checkboxes { options: Vec<CheckboxOption> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxOption {
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub heading: String,
    pub lines: Vec<SummaryLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub field: FieldName,
    pub label: String,
    pub value: String,
}

impl SummaryView {
    /// Summary of a submitted snapshot. Which lines appear depends on the
    /// *snapshot's* position, not the live one.
    pub fn of(snapshot: &FormData, options: &ViewOptions) -> Self {
        let lines = FieldName::visible_for(snapshot.position)
            .into_iter()
            .map(|field| SummaryLine {
                field,
                label: field.summary_label().to_string(),
                value: snapshot.display_value(field, &options.skill_separator),
            })
            .collect();

        Self {
            heading: SUMMARY_HEADING.to_string(),
            lines,
        }
    }

    pub fn line(&self, field: FieldName) -> Option<&SummaryLine> {
        self.lines.iter().find(|l| l.field == field)
    }
}

impl FormView {
    pub fn build(
        form: &FormData,
        errors: &ErrorMap,
        submitted: Option<&FormData>,
        options: &ViewOptions,
    ) -> Self {
        let groups = FieldName::visible_for(form.position)
            .into_iter()
            .map(|field| FieldGroup {
                field,
                label: field.label().to_string(),
                input: field.input_kind(),
                value: field_value(form, field),
                error: errors.get(field).map(str::to_string),
            })
            .collect();

        Self {
            title: options.title.clone(),
            groups,
            summary: submitted.map(|s| SummaryView::of(s, options)),
        }
    }

    pub fn group(&self, field: FieldName) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.field == field)
    }

    pub fn shows(&self, field: FieldName) -> bool {
        self.group(field).is_some()
    }
}

fn field_value(form: &FormData, field: FieldName) -> FieldValue {
    match field.input_kind() {
        InputKind::Select => FieldValue::Select {
            selected: form.display_value(field, ""),
            options: std::iter::once(SelectOption {
                value: String::new(),
                label: "Select Position".to_string(),
            })
            .chain(Position::ALL.iter().map(|p| SelectOption {
                value: p.as_str().to_string(),
                label: p.as_str().to_string(),
            }))
            .collect(),
        },
        InputKind::Checkboxes => FieldValue::Checkboxes {
            options: Skill::ALL
                .iter()
                .map(|s| CheckboxOption {
                    value: s.as_str().to_string(),
                    checked: form.has_skill(*s),
                })
                .collect(),
        },
        InputKind::Text | InputKind::Number | InputKind::DateTimeLocal => FieldValue::Text {
            value: form.display_value(field, ""),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn designer() -> FormData {
        FormData {
            full_name: "Grace".into(),
            position: Some(Position::Designer),
            portfolio_url: "https://example.com/p".into(),
            management_experience: "7".into(),
            ..FormData::default()
        }
    }

    #[test]
    fn unselected_position_shows_only_common_groups() {
        let view = FormView::build(
            &FormData::default(),
            &ErrorMap::new(),
            None,
            &ViewOptions::default(),
        );
        let fields: Vec<_> = view.groups.iter().map(|g| g.field).collect();
        assert_eq!(
            fields,
            vec![
                FieldName::FullName,
                FieldName::Email,
                FieldName::PhoneNumber,
                FieldName::Position,
                FieldName::AdditionalSkills,
                FieldName::InterviewTime,
            ]
        );
        assert_eq!(view.title, DEFAULT_TITLE);
        assert!(view.summary.is_none());
    }

    #[test]
    fn each_position_adds_its_own_group() {
        for (position, shown, hidden) in [
            (
                Position::Developer,
                vec![FieldName::RelevantExperience],
                vec![FieldName::PortfolioUrl, FieldName::ManagementExperience],
            ),
            (
                Position::Designer,
                vec![FieldName::RelevantExperience, FieldName::PortfolioUrl],
                vec![FieldName::ManagementExperience],
            ),
            (
                Position::Manager,
                vec![FieldName::ManagementExperience],
                vec![FieldName::RelevantExperience, FieldName::PortfolioUrl],
            ),
        ] {
            let form = FormData {
                position: Some(position),
                ..FormData::default()
            };
            let view = FormView::build(&form, &ErrorMap::new(), None, &ViewOptions::default());
            for f in shown {
                assert!(view.shows(f), "{position} should show {f}");
            }
            for f in hidden {
                assert!(!view.shows(f), "{position} should hide {f}");
            }
        }
    }

    #[test]
    fn errors_attach_only_to_visible_groups() {
        let errors: ErrorMap = [
            (FieldName::FullName, "Full Name is required!!!".to_string()),
            (FieldName::ManagementExperience, "hidden".to_string()),
        ]
        .into_iter()
        .collect();
        let view = FormView::build(&designer(), &errors, None, &ViewOptions::default());

        assert_eq!(
            view.group(FieldName::FullName).unwrap().error.as_deref(),
            Some("Full Name is required!!!")
        );
        assert!(view.group(FieldName::Email).unwrap().error.is_none());
        assert!(!view.shows(FieldName::ManagementExperience));
    }

    #[test]
    fn summary_follows_submitted_position_not_live_one() {
        let submitted = designer();
        let live = FormData {
            position: Some(Position::Manager),
            ..submitted.clone()
        };
        let view = FormView::build(
            &live,
            &ErrorMap::new(),
            Some(&submitted),
            &ViewOptions::default(),
        );

        assert!(view.shows(FieldName::ManagementExperience));
        let summary = view.summary.unwrap();
        assert_eq!(summary.heading, SUMMARY_HEADING);
        assert!(summary.line(FieldName::PortfolioUrl).is_some());
        assert!(summary.line(FieldName::ManagementExperience).is_none());
        assert_eq!(summary.line(FieldName::Position).unwrap().value, "Designer");
    }

    #[test]
    fn checkbox_options_reflect_selection() {
        let form = FormData {
            additional_skills: vec![Skill::Python],
            ..FormData::default()
        };
        let view = FormView::build(&form, &ErrorMap::new(), None, &ViewOptions::default());
        let skills = view.group(FieldName::AdditionalSkills).unwrap();
        let FieldValue::Checkboxes { options } = &skills.value else {
            panic!("skills should render as checkboxes");
        };
        let checked: Vec<_> = options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(checked, vec!["Python"]);
    }

    #[test]
    fn custom_separator_joins_summary_skills() {
        let snapshot = FormData {
            additional_skills: vec![Skill::JavaScript, Skill::Css],
            ..FormData::default()
        };
        let options = ViewOptions {
            skill_separator: " / ".into(),
            ..ViewOptions::default()
        };
        let summary = SummaryView::of(&snapshot, &options);
        assert_eq!(
            summary.line(FieldName::AdditionalSkills).unwrap().value,
            "JavaScript / CSS"
        );
    }
}

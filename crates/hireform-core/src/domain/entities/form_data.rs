//! The application form's field values and the changes that update them.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{FieldName, Position, Skill},
};

/// Current values of every form field.
///
/// Values are kept exactly as typed; nothing here validates. Fields that the
/// current position hides keep whatever they held before, so switching back
/// to a position restores the earlier input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(with = "position_wire")]
    pub position: Option<Position>,
    pub relevant_experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    /// Checked skills in the order they were checked.
    pub additional_skills: Vec<Skill>,
    pub interview_time: String,
}

impl FormData {
    /// Empty form: every text field blank, no position, no skills.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new `FormData` with `change` applied. `self` is untouched.
    pub fn with_change(&self, change: &FieldChange) -> Result<Self, DomainError> {
        let mut next = self.clone();
        match change {
            FieldChange::Text { field, value } => next.set_text(*field, value)?,
            FieldChange::Checkbox { skill, checked } => {
                if *checked {
                    next.additional_skills.push(*skill);
                } else {
                    next.additional_skills.retain(|s| s != skill);
                }
            }
        }
        Ok(next)
    }

    fn set_text(&mut self, field: FieldName, value: &str) -> Result<(), DomainError> {
        let slot = match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::RelevantExperience => &mut self.relevant_experience,
            FieldName::PortfolioUrl => &mut self.portfolio_url,
            FieldName::ManagementExperience => &mut self.management_experience,
            FieldName::InterviewTime => &mut self.interview_time,
            FieldName::Position => {
                self.position = Position::parse_optional(value)?;
                return Ok(());
            }
            FieldName::AdditionalSkills => return Err(DomainError::CheckboxOnly { field }),
        };
        *slot = value.to_string();
        Ok(())
    }

    /// The raw text value of a field, as an input would display it.
    ///
    /// Skills are joined with `separator`; the position is `""` when unset.
    pub fn display_value(&self, field: FieldName, separator: &str) -> String {
        match field {
            FieldName::FullName => self.full_name.clone(),
            FieldName::Email => self.email.clone(),
            FieldName::PhoneNumber => self.phone_number.clone(),
            FieldName::Position => self.position.map(|p| p.to_string()).unwrap_or_default(),
            FieldName::RelevantExperience => self.relevant_experience.clone(),
            FieldName::PortfolioUrl => self.portfolio_url.clone(),
            FieldName::ManagementExperience => self.management_experience.clone(),
            FieldName::AdditionalSkills => self
                .additional_skills
                .iter()
                .map(Skill::as_str)
                .collect::<Vec<_>>()
                .join(separator),
            FieldName::InterviewTime => self.interview_time.clone(),
        }
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.additional_skills.contains(&skill)
    }
}

// ── Changes & events ──────────────────────────────────────────────────────────

/// One input change, as a form control reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// A text, number, select or datetime input now holds `value`.
    Text { field: FieldName, value: String },
    /// A skill checkbox was checked or unchecked.
    Checkbox { skill: Skill, checked: bool },
}

impl FieldChange {
    pub fn text(field: FieldName, value: impl Into<String>) -> Self {
        Self::Text {
            field,
            value: value.into(),
        }
    }

    pub fn check(skill: Skill) -> Self {
        Self::Checkbox {
            skill,
            checked: true,
        }
    }

    pub fn uncheck(skill: Skill) -> Self {
        Self::Checkbox {
            skill,
            checked: false,
        }
    }

    /// Build a change from the raw `(name, value, checked)` triple a form
    /// control reports. `checked` is `Some` only for checkbox inputs.
    pub fn parse(name: &str, value: &str, checked: Option<bool>) -> Result<Self, DomainError> {
        let field: FieldName = name.parse()?;
        match (field, checked) {
            (FieldName::AdditionalSkills, Some(checked)) => Ok(Self::Checkbox {
                skill: value.parse()?,
                checked,
            }),
            (FieldName::AdditionalSkills, None) => Err(DomainError::CheckboxOnly { field }),
            (_, Some(_)) => Err(DomainError::NotACheckbox { field }),
            (_, None) => {
                if field == FieldName::Position {
                    // Reject unknown positions here rather than on apply.
                    Position::parse_optional(value)?;
                }
                Ok(Self::text(field, value))
            }
        }
    }

    pub fn field(&self) -> FieldName {
        match self {
            Self::Text { field, .. } => *field,
            Self::Checkbox { .. } => FieldName::AdditionalSkills,
        }
    }
}

/// Anything the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Change(FieldChange),
    Submit,
}

impl From<FieldChange> for FormEvent {
    fn from(change: FieldChange) -> Self {
        Self::Change(change)
    }
}

// ── serde helper ──────────────────────────────────────────────────────────────

/// `Option<Position>` travels as `""` / `"Developer"` / … on the wire.
mod position_wire {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use crate::domain::value_objects::Position;

    pub fn serialize<S: Serializer>(value: &Option<Position>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map(|p| p.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Position>, D::Error> {
        let raw = String::deserialize(d)?;
        Position::parse_optional(&raw).map_err(D::Error::custom)
    }
}

//! Domain value objects: Position, Skill, FieldName, InputKind.
//!
//! # Design
//!
//! These are closed, `Copy` value types. They carry their wire strings (the
//! exact values a form input submits) and their `FromStr` parsers. The only
//! behaviour that lives here is the position → extra-field mapping, because
//! it is an intrinsic property of a position rather than a validation rule.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Position ──────────────────────────────────────────────────────────────────

/// The role an applicant is applying for.
///
/// The unselected state (`""` on the wire) is modelled as `Option<Position>`
/// on [`FormData`](crate::domain::FormData), not as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const ALL: [Position; 3] = [Self::Developer, Self::Designer, Self::Manager];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    /// Fields this position adds on top of the common ones, in render order.
    ///
    /// Both the input form and the submitted summary are driven from this one
    /// match so the two can never disagree about what a position shows.
    pub const fn extra_fields(self) -> &'static [FieldName] {
        match self {
            Self::Developer => &[FieldName::RelevantExperience],
            Self::Designer => &[FieldName::RelevantExperience, FieldName::PortfolioUrl],
            Self::Manager => &[FieldName::ManagementExperience],
        }
    }

    /// Parse the wire value of the position select. `""` means unselected.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, DomainError> {
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Developer" => Ok(Self::Developer),
            "Designer" => Ok(Self::Designer),
            "Manager" => Ok(Self::Manager),
            other => Err(DomainError::UnknownPosition(other.to_string())),
        }
    }
}

// ── Skill ─────────────────────────────────────────────────────────────────────

/// One of the additional-skill checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Self::JavaScript, Self::Css, Self::Python];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Css => "CSS",
            Self::Python => "Python",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JavaScript" => Ok(Self::JavaScript),
            "CSS" => Ok(Self::Css),
            "Python" => Ok(Self::Python),
            other => Err(DomainError::UnknownSkill(other.to_string())),
        }
    }
}

// ── FieldName ─────────────────────────────────────────────────────────────────

/// Every field of the application form, in render order.
///
/// `Ord` follows declaration order, which keeps [`ErrorMap`](crate::domain::ErrorMap)
/// iteration aligned with the form layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    InterviewTime,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        Self::FullName,
        Self::Email,
        Self::PhoneNumber,
        Self::Position,
        Self::RelevantExperience,
        Self::PortfolioUrl,
        Self::ManagementExperience,
        Self::AdditionalSkills,
        Self::InterviewTime,
    ];

    /// Fields every applicant sees before the position-specific group.
    pub const LEADING: [FieldName; 4] = [
        Self::FullName,
        Self::Email,
        Self::PhoneNumber,
        Self::Position,
    ];

    /// Fields every applicant sees after the position-specific group.
    pub const TRAILING: [FieldName; 2] = [Self::AdditionalSkills, Self::InterviewTime];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Position => "position",
            Self::RelevantExperience => "relevantExperience",
            Self::PortfolioUrl => "portfolioUrl",
            Self::ManagementExperience => "managementExperience",
            Self::AdditionalSkills => "additionalSkills",
            Self::InterviewTime => "interviewTime",
        }
    }

    /// Label shown next to the input.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience (years)",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::InterviewTime => "Preferred Interview Time",
        }
    }

    /// Label used in the read-only summary after a successful submit.
    pub const fn summary_label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Position",
            Self::RelevantExperience => "Relevant Experience",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::InterviewTime => "Interview Time",
        }
    }

    pub const fn input_kind(&self) -> InputKind {
        match self {
            Self::PhoneNumber | Self::RelevantExperience => InputKind::Number,
            Self::Position => InputKind::Select,
            Self::AdditionalSkills => InputKind::Checkboxes,
            Self::InterviewTime => InputKind::DateTimeLocal,
            Self::FullName | Self::Email | Self::PortfolioUrl | Self::ManagementExperience => {
                InputKind::Text
            }
        }
    }

    /// Fields shown for the given (possibly unselected) position, in order.
    pub fn visible_for(position: Option<Position>) -> Vec<FieldName> {
        let extra = position.map_or(&[] as &[FieldName], Position::extra_fields);
        Self::LEADING
            .iter()
            .chain(extra)
            .chain(Self::TRAILING.iter())
            .copied()
            .collect()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

// ── InputKind ─────────────────────────────────────────────────────────────────

/// The kind of input control a field is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    Text,
    Number,
    Select,
    Checkboxes,
    DateTimeLocal,
}

// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{FieldName, Position, Skill};

/// Root domain error type.
///
/// These are *program* errors: a caller fed the form a value outside its
/// closed vocabulary. User-input validation failures are never errors; they
/// are entries in an [`ErrorMap`](crate::domain::ErrorMap).
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown position '{0}'")]
    UnknownPosition(String),

    #[error("unknown skill '{0}'")]
    UnknownSkill(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A plain value change was sent to the checkbox group.
    #[error("field '{field}' only accepts checkbox changes")]
    CheckboxOnly { field: FieldName },

    /// A checkbox change was sent to a plain input.
    #[error("field '{field}' is not a checkbox group")]
    NotACheckbox { field: FieldName },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownPosition(value) => vec![
                format!("'{}' is not an open position", value),
                format!(
                    "Choose one of: {} (or leave empty)",
                    Position::ALL.map(|p| p.as_str()).join(", ")
                ),
            ],
            Self::UnknownSkill(value) => vec![
                format!("'{}' is not one of the listed skills", value),
                format!(
                    "Choose from: {}",
                    Skill::ALL.map(|s| s.as_str()).join(", ")
                ),
            ],
            Self::UnknownField(value) => vec![
                format!("'{}' is not a form field", value),
                format!(
                    "Fields are: {}",
                    FieldName::ALL.map(|f| f.as_str()).join(", ")
                ),
            ],
            Self::CheckboxOnly { field } => vec![
                format!("Use a check/uncheck step for '{}'", field),
            ],
            Self::NotACheckbox { field } => vec![
                format!("Use a change step with a value for '{}'", field),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownPosition(_) | Self::UnknownSkill(_) | Self::UnknownField(_) => {
                ErrorCategory::Validation
            }
            Self::CheckboxOnly { .. } | Self::NotACheckbox { .. } => ErrorCategory::Mismatch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A value outside a closed vocabulary.
    Validation,
    /// The right value sent through the wrong kind of event.
    Mismatch,
}

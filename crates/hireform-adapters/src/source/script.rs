//! Event scripts on disk.
//!
//! # Script format
//!
//! A script is a list of steps under the key `step`, applied in order.
//!
//! ```toml
//! [[step]]
//! action = "change"        # change | check | uncheck | submit
//! field  = "fullName"      # camelCase field name (change only)
//! value  = "Ada Lovelace"
//!
//! [[step]]
//! action = "check"
//! value  = "Python"        # JavaScript | CSS | Python
//!
//! [[step]]
//! action = "submit"
//! ```
//!
//! The JSON form is the same document: `{ "step": [ { "action": "submit" } ] }`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use hireform_core::{
    application::{ApplicationError, ports::EventSource},
    domain::{FieldChange, FieldName, FormEvent},
    error::HireformResult,
};

use crate::format::DocumentFormat;

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default, alias = "steps")]
    step: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum Step {
    Change { field: String, value: String },
    Check { value: String },
    Uncheck { value: String },
    Submit,
}

impl Step {
    fn into_event(self) -> Result<FormEvent, hireform_core::domain::DomainError> {
        let skills = FieldName::AdditionalSkills.as_str();
        let change = match self {
            Self::Change { field, value } => FieldChange::parse(&field, &value, None)?,
            Self::Check { value } => FieldChange::parse(skills, &value, Some(true))?,
            Self::Uncheck { value } => FieldChange::parse(skills, &value, Some(false))?,
            Self::Submit => return Ok(FormEvent::Submit),
        };
        Ok(change.into())
    }
}

/// Reads events from a TOML or JSON script.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    path: PathBuf,
}

impl ScriptSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse script text that was not read from `self.path`.
    pub fn parse(&self, raw: &str, format: DocumentFormat) -> HireformResult<Vec<FormEvent>> {
        let script: Script = format.parse(raw).map_err(|reason| self.invalid(reason))?;

        script
            .step
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                step.into_event()
                    .map_err(|e| self.invalid(format!("step {}: {}", index + 1, e)).into())
            })
            .collect()
    }

    fn invalid(&self, reason: String) -> ApplicationError {
        ApplicationError::InvalidScript {
            path: self.path.clone(),
            reason,
        }
    }
}

impl EventSource for ScriptSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn events(&self) -> HireformResult<Vec<FormEvent>> {
        let format = DocumentFormat::from_path(&self.path)?;

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::EventSourceFailed {
                reason: format!("cannot read {}: {}", self.path.display(), e),
            }
        })?;

        let events = self.parse(&raw, format)?;
        debug!(count = events.len(), "Loaded event script");
        Ok(events)
    }
}

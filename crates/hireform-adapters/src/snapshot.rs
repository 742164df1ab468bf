//! Loading a whole `FormData` document for stand-alone validation.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use hireform_core::{application::ApplicationError, domain::FormData, error::HireformResult};

use crate::format::DocumentFormat;

/// Reads a form snapshot (TOML or JSON, camelCase keys, every key optional).
///
/// ```toml
/// fullName = "Ada Lovelace"
/// email = "ada@example.org"
/// position = "Manager"
/// managementExperience = "4"
/// additionalSkills = ["Python"]
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotLoader {
    path: PathBuf,
}

impl SnapshotLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> HireformResult<FormData> {
        let format = DocumentFormat::from_path(&self.path)?;

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::SnapshotUnreadable {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        let data = self.parse(&raw, format)?;
        debug!(position = ?data.position, "Loaded form snapshot");
        Ok(data)
    }

    pub fn parse(&self, raw: &str, format: DocumentFormat) -> HireformResult<FormData> {
        format.parse(raw).map_err(|reason| {
            ApplicationError::InvalidSnapshot {
                path: self.path.clone(),
                reason,
            }
            .into()
        })
    }
}

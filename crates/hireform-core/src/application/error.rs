//! Application layer errors.
//!
//! These errors represent failures in orchestration, not form rules.
//! Vocabulary errors are `DomainError` from `crate::domain`; validation
//! failures are not errors at all.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a form through its ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An event source could not produce its events.
    #[error("Event source failed: {reason}")]
    EventSourceFailed { reason: String },

    /// An event script was read but could not be understood.
    #[error("Invalid event script {path}: {reason}")]
    InvalidScript { path: PathBuf, reason: String },

    /// A form snapshot file could not be read.
    #[error("Cannot read form snapshot {path}: {reason}")]
    SnapshotUnreadable { path: PathBuf, reason: String },

    /// A form snapshot was read but could not be understood.
    #[error("Invalid form snapshot {path}: {reason}")]
    InvalidSnapshot { path: PathBuf, reason: String },

    /// A file extension no adapter knows how to read.
    #[error("Unsupported file format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Rendering the view failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EventSourceFailed { reason } => vec![
                format!("Could not read events: {}", reason),
                "Check that the script file exists and is readable".into(),
            ],
            Self::InvalidScript { path, reason } => vec![
                format!("Problem in {}: {}", path.display(), reason),
                "Each step needs an `action` of change, check, uncheck or submit".into(),
                "Example: { action = \"change\", field = \"fullName\", value = \"Ada\" }".into(),
            ],
            Self::SnapshotUnreadable { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Snapshots are .toml or .json files of form fields".into(),
            ],
            Self::InvalidSnapshot { path, reason } => vec![
                format!("Problem in {}: {}", path.display(), reason),
                "Keys are camelCase form fields, e.g. fullName, phoneNumber".into(),
                "position must be \"\", Developer, Designer or Manager".into(),
            ],
            Self::UnsupportedFormat { extension, .. } => vec![
                format!("'.{}' files are not supported", extension),
                "Use a .toml or .json file".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Try a different --output-format".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EventSourceFailed { .. } | Self::SnapshotUnreadable { .. } => {
                ErrorCategory::NotFound
            }
            Self::InvalidScript { .. }
            | Self::InvalidSnapshot { .. }
            | Self::UnsupportedFormat { .. } => {
                ErrorCategory::Validation
            }
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}

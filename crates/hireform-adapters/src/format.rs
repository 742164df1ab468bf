//! On-disk document formats, chosen by file extension.

use std::path::Path;

use serde::de::DeserializeOwned;

use hireform_core::{application::ApplicationError, error::HireformResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from `path`'s extension (case-insensitive).
    pub fn from_path(path: &Path) -> HireformResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }
            .into()),
        }
    }

    /// Deserialize `raw`. The error is the parser's message, for the caller
    /// to wrap with its own context.
    pub fn parse<T: DeserializeOwned>(self, raw: &str) -> Result<T, String> {
        match self {
            Self::Toml => toml::from_str(raw).map_err(|e| e.message().to_string()),
            Self::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
        }
    }
}

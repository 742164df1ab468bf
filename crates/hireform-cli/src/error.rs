//! Errors the `hireform` binary can end with.
//!
//! A rejected application is not a program error inside the core, but at
//! the process boundary it still needs a non-zero exit, so it shows up here
//! as [`CliError::InvalidApplication`].

use std::{error::Error as _, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use hireform_core::error::{ErrorCategory as CoreCategory, HireformError};

pub type CliResult<T> = Result<T, CliError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The field errors were already printed; this only carries the exit.
    #[error("Application has {count} validation error(s)")]
    InvalidApplication { count: usize },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("{0}")]
    Core(#[from] HireformError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user aborted a prompt.
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

/// How an error is presented and which exit code it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, bad script or snapshot, rejected application.
    UserError,
    /// A script or snapshot file that is not there.
    NotFound,
    Configuration,
    Internal,
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::InvalidApplication { .. } => vec![
                "Fix the fields listed above and submit again".into(),
                "Use 'hireform validate FILE --json' for machine-readable errors".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Run 'hireform config path' to find the config file".into(),
                "Run 'hireform init --force' to rewrite the defaults".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Cancelled => vec!["Nothing was submitted".into()],
            Self::FeatureNotAvailable { feature } => vec![
                format!("Rebuild with: cargo install hireform-cli --features {feature}"),
                "Use 'hireform replay SCRIPT' to drive the form from a file".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidApplication { .. } | Self::Cancelled => {
                ErrorCategory::UserError
            }
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    /// 2 user, 3 not found, 4 configuration, 1 anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The stderr report: message, causes when `verbose`, then suggestions.
    pub fn render(&self, verbose: bool, colour: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n{} {}",
            paint(colour, "Error:", |t: &str| t.red().bold().to_string()),
            self
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("Caused by: {err}");
                let _ = writeln!(
                    out,
                    "  {}",
                    paint(colour, &line, |t: &str| t.dimmed().to_string())
                );
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(
                out,
                "\n{}",
                paint(colour, "Suggestions:", |t: &str| t.yellow().bold().to_string())
            );
            for s in suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            let hint = "Use -v / --verbose for more details.";
            let _ = writeln!(
                out,
                "\n{}",
                paint(colour, hint, |t: &str| t.dimmed().to_string())
            );
        }

        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(error = %self, "command failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, "command failed")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

fn paint(colour: bool, text: &str, style: fn(&str) -> String) -> String {
    if colour { style(text) } else { text.to_string() }
}

/// Attach a context message when turning a foreign error into [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e}", f().into()),
            source: Some(Box::new(e)),
        })
    }
}

//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ViewOptions`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `HIREFORM_FORM__TITLE`, `HIREFORM_OUTPUT__NO_COLOR`, ...
//! 3. Config file: `--config FILE`, or else the platform config file
//!    overlaid by `.hireform.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use hireform_core::domain::{ViewOptions, entities::view};

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "HIREFORM";

/// Per-project config file, looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".hireform.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Form presentation settings.
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub title: String,
    /// Joins the selected skills in the submitted summary.
    pub skill_separator: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: view::DEFAULT_TITLE.into(),
            skill_separator: view::DEFAULT_SKILL_SEPARATOR.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it, the default locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::load_with(config_file.map(PathBuf::as_path), env)
    }

    fn load_with(config_file: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .set_default("form.title", defaults.form.title)?
            .set_default("form.skill_separator", defaults.form.skill_separator)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml)),
            None => builder
                .add_source(
                    File::from(Self::config_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(Path::new(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                ),
        };

        let config: Self = builder
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.hireform.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "hireform", "hireform")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Presentation options for the form, with an optional `--title` override.
    pub fn view_options(&self, title: Option<&str>) -> ViewOptions {
        ViewOptions {
            title: title.unwrap_or(&self.form.title).to_string(),
            skill_separator: self.form.skill_separator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn env_of(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(map))
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("hireform.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_match_the_form() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.form.title, "Job Application Form");
        assert_eq!(cfg.form.skill_separator, ", ");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[form]\ntitle = \"Apply Now\"\n");

        let cfg = AppConfig::load_with(Some(&path), env_of(&[])).unwrap();
        assert_eq!(cfg.form.title, "Apply Now");
        assert_eq!(cfg.form.skill_separator, ", ");
    }

    #[test]
    fn env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[form]\ntitle = \"From File\"\n");

        let cfg = AppConfig::load_with(
            Some(&path),
            env_of(&[
                ("HIREFORM_FORM__TITLE", "From Env"),
                ("HIREFORM_OUTPUT__NO_COLOR", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.form.title, "From Env");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load_with(Some(&missing), env_of(&[])).is_err());
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[form\ntitle = ");
        assert!(AppConfig::load_with(Some(&path), env_of(&[])).is_err());
    }

    #[test]
    fn view_options_prefer_flag_title() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.view_options(None).title, "Job Application Form");
        assert_eq!(cfg.view_options(Some("Apply")).title, "Apply");
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

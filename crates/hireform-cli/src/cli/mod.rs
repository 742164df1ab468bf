//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hireform",
    bin_name = "hireform",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Job application form with position-aware validation",
    long_about = "Hireform collects a job application, validates it against \
                  the rules for the chosen position, and shows a summary once \
                  a submission is accepted.",
    after_help = "EXAMPLES:\n\
        \x20 hireform fill\n\
        \x20 hireform replay session.toml\n\
        \x20 hireform validate application.json --json\n\
        \x20 hireform completions bash > /usr/share/bash-completion/completions/hireform",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in the form interactively.
    #[command(
        about = "Fill in the application interactively",
        after_help = "Prompts for every visible field, submits, and re-prompts\n\
            the failing fields until the application is accepted."
    )]
    Fill(FillArgs),

    /// Replay an event script.
    #[command(
        about = "Replay an event script and print the final form",
        after_help = "EXAMPLES:\n\
            \x20 hireform replay session.toml\n\
            \x20 hireform replay session.json --output-format json"
    )]
    Replay(ReplayArgs),

    /// Validate a saved application.
    #[command(
        visible_alias = "check",
        about = "Validate a saved application",
        after_help = "Exits 0 when the application is valid and 2 when it is not.\n\n\
            EXAMPLES:\n\
            \x20 hireform validate application.toml\n\
            \x20 hireform validate application.json --json"
    )]
    Validate(ValidateArgs),

    /// Initialise a Hireform configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 hireform init           # platform config location\n\
            \x20 hireform init --local   # .hireform.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hireform completions bash > ~/.local/share/bash-completion/completions/hireform\n\
            \x20 hireform completions zsh  > ~/.zfunc/_hireform\n\
            \x20 hireform completions fish > ~/.config/fish/completions/hireform.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Hireform configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 hireform config get form.title\n\
            \x20 hireform config list\n\
            \x20 hireform config path"
    )]
    Config(ConfigCommands),
}

// ── fill ──────────────────────────────────────────────────────────────────────

/// Arguments for `hireform fill`.
#[derive(Debug, Args)]
pub struct FillArgs {
    /// Form title, overriding `form.title`.
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,
}

// ── replay ────────────────────────────────────────────────────────────────────

/// Arguments for `hireform replay`.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Event script (`.toml` or `.json`).
    #[arg(value_name = "SCRIPT", help = "Event script (.toml or .json)")]
    pub script: PathBuf,

    /// Form title, overriding `form.title`.
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `hireform validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Form snapshot (`.toml` or `.json`, camelCase keys).
    #[arg(value_name = "FILE", help = "Application snapshot (.toml or .json)")]
    pub file: PathBuf,

    /// Print the error map as JSON.
    #[arg(long = "json", help = "Print the error map as JSON")]
    pub json: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `hireform init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.hireform.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hireform completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `hireform config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `form.title`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

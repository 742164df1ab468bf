//! Everything the commands print on stdout goes through [`OutputManager`].
//!
//! Results (`data`) are always printed. Status lines carry a leading mark
//! and are dropped under `--quiet`, except errors.

use std::io::{self, IsTerminal};

use clap::ValueEnum as _;
use console::Term;
use owo_colors::{AnsiColors, OwoColorize};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Mark {
    Success,
    Error,
    Warning,
    Info,
}

impl Mark {
    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2717}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }

    fn colour(self) -> AnsiColors {
        match self {
            Self::Success => AnsiColors::Green,
            Self::Error => AnsiColors::Red,
            Self::Warning => AnsiColors::Yellow,
            Self::Info => AnsiColors::Blue,
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    colour: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = resolve_format(args.output_format, &config.output.format);
        Self {
            format,
            quiet: args.quiet,
            colour: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unmarked line; suppressed by `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// A command's result: the rendered form, a JSON document, a config
    /// value. Never suppressed.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text.trim_end_matches('\n'))
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Success, msg)
    }

    /// Shown even with `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Error, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.colour {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn marked(&self, mark: Mark, msg: &str) -> io::Result<()> {
        if self.quiet && !matches!(mark, Mark::Error) {
            return Ok(());
        }
        self.term.write_line(&self.styled(mark, msg))
    }

    fn styled(&self, mark: Mark, msg: &str) -> String {
        if self.colour {
            format!(
                "{} {}",
                mark.glyph().color(mark.colour()).bold(),
                msg.color(mark.colour())
            )
        } else {
            format!("{} {msg}", mark.glyph())
        }
    }
}

/// An explicit `--output-format` wins. `auto` tries the configured
/// `output.format`, and if that is also `auto` the terminal decides.
fn resolve_format(flag: OutputFormat, configured: &str) -> OutputFormat {
    let wanted = match flag {
        OutputFormat::Auto => OutputFormat::from_str(configured, true).unwrap_or_else(|_| {
            tracing::warn!(format = configured, "ignoring unknown output.format");
            OutputFormat::Auto
        }),
        explicit => explicit,
    };

    match wanted {
        OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        explicit => explicit,
    }
}

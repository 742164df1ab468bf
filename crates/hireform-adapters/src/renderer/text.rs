//! Plain-text renderer.
//!
//! ```text
//! Job Application Form
//! ====================
//!
//!   ! Full Name is required!!!
//! Full Name:
//! Applying for Position: Developer
//! Additional Skills: [x] JavaScript  [ ] CSS  [ ] Python
//! ```

use std::fmt::Write;

use hireform_core::{
    application::{ApplicationError, ports::FormRenderer},
    domain::{FieldGroup, FieldValue, FormView, SummaryView},
    error::HireformResult,
};

/// Renders the view as plain text, one field per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl FormRenderer for TextRenderer {
    fn render(&self, view: &FormView) -> HireformResult<String> {
        let mut out = String::new();
        write_view(&mut out, view).map_err(|e| ApplicationError::RenderingFailed {
            reason: e.to_string(),
        })?;
        Ok(out)
    }
}

fn write_view(out: &mut String, view: &FormView) -> std::fmt::Result {
    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", "=".repeat(view.title.chars().count()))?;
    writeln!(out)?;

    for group in &view.groups {
        write_group(out, group)?;
    }

    if let Some(summary) = &view.summary {
        writeln!(out)?;
        write_summary(out, summary)?;
    }
    Ok(())
}

fn write_group(out: &mut String, group: &FieldGroup) -> std::fmt::Result {
    if let Some(error) = &group.error {
        writeln!(out, "  ! {error}")?;
    }

    write!(out, "{}:", group.label)?;
    match &group.value {
        FieldValue::Text { value } if value.is_empty() => {}
        FieldValue::Text { value } => write!(out, " {value}")?,
        FieldValue::Select { selected, options } => {
            let label = options
                .iter()
                .find(|o| &o.value == selected)
                .map_or(selected.as_str(), |o| o.label.as_str());
            write!(out, " {label}")?;
        }
        FieldValue::Checkboxes { options } => {
            for (i, option) in options.iter().enumerate() {
                let mark = if option.checked { 'x' } else { ' ' };
                let gap = if i == 0 { " " } else { "  " };
                write!(out, "{gap}[{mark}] {}", option.value)?;
            }
        }
    }
    writeln!(out)
}

fn write_summary(out: &mut String, summary: &SummaryView) -> std::fmt::Result {
    writeln!(out, "{}", summary.heading)?;
    writeln!(out, "{}", "-".repeat(summary.heading.chars().count()))?;
    for line in &summary.lines {
        writeln!(out, "{}: {}", line.label, line.value)?;
    }
    Ok(())
}

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hireform-adapters` crate provides implementations.

use crate::domain::{FormEvent, FormView};
use crate::error::HireformResult;

/// Port for a sequence of form events.
///
/// Implemented by:
/// - `hireform_adapters::source::ScriptSource` (TOML / JSON script on disk)
/// - `hireform_adapters::source::MemorySource` (fixed list, for tests)
#[cfg_attr(test, mockall::automock)]
pub trait EventSource: Send + Sync {
    /// All events, in the order they should be applied.
    fn events(&self) -> HireformResult<Vec<FormEvent>>;
}

/// Port for drawing a form view.
///
/// Implemented by:
/// - `hireform_adapters::renderer::TextRenderer` (plain text)
/// - `hireform_adapters::renderer::JsonRenderer` (machine-readable)
#[cfg_attr(test, mockall::automock)]
pub trait FormRenderer: Send + Sync {
    fn render(&self, view: &FormView) -> HireformResult<String>;
}

//! Machine-readable renderer.

use hireform_core::{
    application::{ApplicationError, ports::FormRenderer},
    domain::FormView,
    error::HireformResult,
};

/// Renders the view as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl FormRenderer for JsonRenderer {
    fn render(&self, view: &FormView) -> HireformResult<String> {
        serde_json::to_string_pretty(view).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

//! Form renderer adapters.

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

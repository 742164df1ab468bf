//! Infrastructure adapters for Hireform.
//!
//! This crate implements the ports defined in `hireform-core::application::ports`.
//! It contains all file I/O and serialization formats.

pub mod format;
pub mod renderer;
pub mod snapshot;
pub mod source;

// Re-export commonly used adapters
pub use format::DocumentFormat;
pub use renderer::{JsonRenderer, TextRenderer};
pub use snapshot::SnapshotLoader;
pub use source::{MemorySource, ScriptSource};

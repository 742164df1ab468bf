//! Application layer for Hireform.
//!
//! This layer contains:
//! - **Services**: the `ApplicationForm` component and `SessionService`
//! - **Ports**: Interface definitions (traits) for event sources and renderers
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! form rules itself. Validation lives in `crate::domain::validation`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ApplicationForm, FormPhase, SessionReport, SessionService, SubmitOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{EventSource, FormRenderer};

pub use error::ApplicationError;

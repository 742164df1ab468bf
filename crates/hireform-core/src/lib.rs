//! Hireform Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Hireform
//! job application form, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          hireform-cli (CLI)             │
//! │   (fill / replay / validate commands)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ApplicationForm, SessionService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (EventSource, FormRenderer)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     hireform-adapters (Infrastructure)  │
//! │ (ScriptSource, TextRenderer, JsonRend.) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (FormData, validate, ErrorMap, View)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hireform_core::prelude::*;
//!
//! let mut form = ApplicationForm::new();
//! form.on_field_change(FieldChange::text(FieldName::Position, "Manager")).unwrap();
//!
//! match form.submit() {
//!     SubmitOutcome::Accepted => println!("submitted"),
//!     SubmitOutcome::Rejected { errors } => {
//!         assert_eq!(
//!             errors.get(FieldName::ManagementExperience),
//!             Some("Management Experience is required!!!")
//!         );
//!     }
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationForm, FormPhase, SessionReport, SessionService, SubmitOutcome,
        ports::{EventSource, FormRenderer},
    };
    pub use crate::domain::{
        ErrorMap, FieldChange, FieldName, FormData, FormEvent, FormView, Position, Skill,
        SummaryView, ViewOptions, validate,
    };
    pub use crate::error::{HireformError, HireformResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Hireform.
//!
//! This module contains the pure form logic: field values, the validator, and
//! the render model. No I/O and no rendering backend live here.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: every operation is a synchronous function of its inputs
//! - **No I/O**: no filesystem, terminal, or network access
//! - **Closed vocabularies**: positions, skills and fields are enums
//! - **Immutable updates**: a change produces a new `FormData`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    error_map::ErrorMap,
    form_data::{FieldChange, FormData, FormEvent},
    view::{
        CheckboxOption, FieldGroup, FieldValue, FormView, SelectOption, SummaryLine, SummaryView,
        ViewOptions,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use validation::{messages, validate};

pub use value_objects::{FieldName, InputKind, Position, Skill};

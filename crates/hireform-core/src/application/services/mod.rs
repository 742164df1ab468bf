//! Application services - orchestrate use cases.
//!
//! `ApplicationForm` is the component itself; `SessionService` drives one
//! through the ports for scripted sessions.

pub mod application_form;
pub mod session_service;

pub use application_form::{ApplicationForm, FormPhase, SubmitOutcome};
pub use session_service::{SessionReport, SessionService};

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `hireform-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `EventSource`: where form events come from
//!   - `FormRenderer`: how a `FormView` is drawn
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `ApplicationForm` itself (`on_field_change`, `submit`, `view`)

pub mod output;

pub use output::{EventSource, FormRenderer};

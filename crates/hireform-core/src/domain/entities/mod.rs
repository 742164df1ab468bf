pub mod error_map;
pub mod form_data;
pub mod view;

pub use crate::domain::DomainError;
pub use error_map::ErrorMap;
pub use form_data::{FieldChange, FormData, FormEvent};
pub use view::{FormView, SummaryView, ViewOptions};

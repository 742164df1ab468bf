//! `ApplicationForm` - the form component's state and event handlers.
//!
//! Owns the three pieces of component state:
//! 1. the live `FormData`
//! 2. the `ErrorMap` from the most recent submit
//! 3. the last accepted snapshot, if any
//!
//! A field change only replaces the live data. A submit re-runs validation
//! from scratch and either stores the errors or commits a snapshot. Nothing
//! ever clears the snapshot, so the summary can lag behind later edits until
//! the next accepted submit.

use tracing::{debug, info, instrument};

use crate::{
    domain::{
        ErrorMap, FieldChange, FormData, FormEvent, FormView, ViewOptions, validate,
    },
    error::HireformResult,
};

/// Whether a valid submission has been committed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the live data is now the submitted snapshot.
    Accepted,
    /// Validation failed with these errors; nothing was committed.
    Rejected { errors: ErrorMap },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    data: FormData,
    errors: ErrorMap,
    submitted: Option<FormData>,
    options: ViewOptions,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ViewOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Apply one input change.
    ///
    /// The next state is built separately and swapped in, so a rejected
    /// change leaves the form exactly as it was.
    #[instrument(level = "debug", skip(self), fields(field = %change.field()))]
    pub fn on_field_change(&mut self, change: FieldChange) -> HireformResult<()> {
        self.data = self.data.with_change(&change)?;
        debug!("field updated");
        Ok(())
    }

    /// Validate the live data and commit it if it passes.
    #[instrument(level = "debug", skip(self))]
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.data);

        if self.errors.is_empty() {
            self.submitted = Some(self.data.clone());
            info!(position = ?self.data.position, "application accepted");
            SubmitOutcome::Accepted
        } else {
            debug!(error_count = self.errors.len(), "application rejected");
            SubmitOutcome::Rejected {
                errors: self.errors.clone(),
            }
        }
    }

    /// Apply any event. Only changes can fail.
    pub fn dispatch(&mut self, event: FormEvent) -> HireformResult<Option<SubmitOutcome>> {
        match event {
            FormEvent::Change(change) => self.on_field_change(change).map(|()| None),
            FormEvent::Submit => Ok(Some(self.submit())),
        }
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitted.is_some() {
            FormPhase::Submitted
        } else {
            FormPhase::Editing
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Errors from the most recent submit (empty before the first one).
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn submitted(&self) -> Option<&FormData> {
        self.submitted.as_ref()
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Everything a renderer needs to draw the current state.
    pub fn view(&self) -> FormView {
        FormView::build(
            &self.data,
            &self.errors,
            self.submitted.as_ref(),
            &self.options,
        )
    }
}

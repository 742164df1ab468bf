//! Session Service - drive a form from an event source.
//!
//! This service coordinates a replay:
//! 1. Pull every event from the `EventSource`
//! 2. Apply them in order to an `ApplicationForm`
//! 3. Render the final view with the `FormRenderer`

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{EventSource, FormRenderer},
        services::application_form::{ApplicationForm, FormPhase, SubmitOutcome},
    },
    domain::ViewOptions,
    error::HireformResult,
};

/// What happened during a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub events_applied: usize,
    pub submits: usize,
    pub accepted: usize,
    pub last_outcome: Option<SubmitOutcome>,
    pub phase: FormPhase,
    pub rendered: String,
}

impl SessionReport {
    /// `true` if the session's last submit was accepted.
    pub fn ended_accepted(&self) -> bool {
        matches!(self.last_outcome, Some(SubmitOutcome::Accepted))
    }
}

/// Replays a scripted session against a fresh form.
pub struct SessionService {
    source: Box<dyn EventSource>,
    renderer: Box<dyn FormRenderer>,
    form: ApplicationForm,
}

impl SessionService {
    /// Create a new session service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use hireform_core::application::SessionService;
    ///
    /// let service = SessionService::new(
    ///     source,   // impl EventSource
    ///     renderer, // impl FormRenderer
    ///     ViewOptions::default(),
    /// );
    /// ```
    pub fn new(
        source: Box<dyn EventSource>,
        renderer: Box<dyn FormRenderer>,
        options: ViewOptions,
    ) -> Self {
        Self {
            source,
            renderer,
            form: ApplicationForm::with_options(options),
        }
    }

    /// Apply every event from the source, then render the result.
    ///
    /// Stops at the first change the form rejects. A submit that fails
    /// validation is an ordinary outcome and never stops the replay.
    #[instrument(skip_all)]
    pub fn replay(&mut self) -> HireformResult<SessionReport> {
        let events = self.source.events()?;
        info!(count = events.len(), "Replaying form events");

        let mut events_applied = 0;
        let mut submits = 0;
        let mut accepted = 0;
        let mut last_outcome = None;

        for (index, event) in events.into_iter().enumerate() {
            match self.form.dispatch(event) {
                Ok(Some(outcome)) => {
                    submits += 1;
                    if outcome.is_accepted() {
                        accepted += 1;
                    }
                    debug!(index, accepted = outcome.is_accepted(), "Submit processed");
                    last_outcome = Some(outcome);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(index, error = %e, "Event rejected, stopping replay");
                    return Err(e);
                }
            }
            events_applied += 1;
        }

        let rendered = self.renderer.render(&self.form.view())?;
        info!(submits, accepted, "Replay completed");

        Ok(SessionReport {
            events_applied,
            submits,
            accepted,
            last_outcome,
            phase: self.form.phase(),
            rendered,
        })
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::output::{MockEventSource, MockFormRenderer},
    };
    use crate::domain::{FieldChange, FieldName, FormEvent, Skill};
    use crate::error::HireformError;

    fn developer_events() -> Vec<FormEvent> {
        vec![
            FieldChange::text(FieldName::FullName, "Linus").into(),
            FieldChange::text(FieldName::Email, "linus@example.org").into(),
            FieldChange::text(FieldName::PhoneNumber, "12345").into(),
            FieldChange::text(FieldName::Position, "Developer").into(),
            FieldChange::text(FieldName::RelevantExperience, "30").into(),
            FieldChange::check(Skill::JavaScript).into(),
            FieldChange::text(FieldName::InterviewTime, "2024-05-01T09:30").into(),
            FormEvent::Submit,
        ]
    }

    fn echo_renderer() -> MockFormRenderer {
        let mut renderer = MockFormRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|view| Ok(format!("{} groups", view.groups.len())));
        renderer
    }

    #[test]
    fn replay_applies_events_and_renders_once() {
        let mut source = MockEventSource::new();
        source.expect_events().times(1).returning(|| {
            let mut events = vec![FormEvent::Submit];
            events.extend(developer_events());
            Ok(events)
        });

        let mut service = SessionService::new(
            Box::new(source),
            Box::new(echo_renderer()),
            ViewOptions::default(),
        );
        let report = service.replay().unwrap();

        assert_eq!(report.events_applied, 9);
        assert_eq!(report.submits, 2);
        assert_eq!(report.accepted, 1);
        assert!(report.ended_accepted());
        assert_eq!(report.phase, FormPhase::Submitted);
        assert_eq!(report.rendered, "7 groups");
    }

    #[test]
    fn replay_stops_on_rejected_change() {
        let mut source = MockEventSource::new();
        source.expect_events().returning(|| {
            Ok(vec![
                FieldChange::text(FieldName::FullName, "Linus").into(),
                FieldChange::text(FieldName::AdditionalSkills, "Rust").into(),
                FormEvent::Submit,
            ])
        });
        let mut renderer = MockFormRenderer::new();
        renderer.expect_render().never();

        let mut service =
            SessionService::new(Box::new(source), Box::new(renderer), ViewOptions::default());
        let err = service.replay().unwrap_err();

        assert!(matches!(err, HireformError::Domain(_)));
        assert_eq!(service.form().data().full_name, "Linus");
        assert!(service.form().submitted().is_none());
    }

    #[test]
    fn source_failure_propagates() {
        let mut source = MockEventSource::new();
        source.expect_events().returning(|| {
            Err(ApplicationError::EventSourceFailed {
                reason: "gone".into(),
            }
            .into())
        });
        let mut renderer = MockFormRenderer::new();
        renderer.expect_render().never();

        let mut service =
            SessionService::new(Box::new(source), Box::new(renderer), ViewOptions::default());
        assert!(matches!(
            service.replay(),
            Err(HireformError::Application(
                ApplicationError::EventSourceFailed { .. }
            ))
        ));
    }

    #[test]
    fn session_without_submit_stays_editing() {
        let mut source = MockEventSource::new();
        source
            .expect_events()
            .returning(|| Ok(vec![FieldChange::text(FieldName::FullName, "Linus").into()]));

        let mut service = SessionService::new(
            Box::new(source),
            Box::new(echo_renderer()),
            ViewOptions::default(),
        );
        let report = service.replay().unwrap();

        assert_eq!(report.submits, 0);
        assert_eq!(report.last_outcome, None);
        assert!(!report.ended_accepted());
        assert_eq!(report.phase, FormPhase::Editing);
    }
}

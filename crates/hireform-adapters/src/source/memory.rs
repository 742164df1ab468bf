//! In-memory event source.

use hireform_core::{application::ports::EventSource, domain::FormEvent, error::HireformResult};

/// A fixed list of events, handed out on every call.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    events: Vec<FormEvent>,
}

impl MemorySource {
    pub fn new(events: Vec<FormEvent>) -> Self {
        Self { events }
    }

    /// Append an event (builder style).
    pub fn with(mut self, event: impl Into<FormEvent>) -> Self {
        self.events.push(event.into());
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<FormEvent> for MemorySource {
    fn from_iter<I: IntoIterator<Item = FormEvent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl EventSource for MemorySource {
    fn events(&self) -> HireformResult<Vec<FormEvent>> {
        Ok(self.events.clone())
    }
}

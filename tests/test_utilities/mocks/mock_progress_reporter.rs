use cves_diff::prelude::*;
use std::sync::{Arc, Mutex};

/// One captured reporter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Message(String),
    Step {
        current: usize,
        total: usize,
        label: Option<String>,
    },
    Warning(String),
    Completion(String),
}

/// Mock ProgressReporter for testing that captures every call.
///
/// Clones share the same event log, so a test can keep one handle and move
/// the other into the use case.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ReportedEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn steps(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Step { current, total, .. } => Some((current, total)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ReportedEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(ReportedEvent::Step {
            current,
            total,
            label: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(ReportedEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ReportedEvent::Completion(message.to_string()));
    }
}

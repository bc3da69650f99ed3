//! Shared mock infrastructure for unit tests.
//!
//! Provides canned [`PageEndpoint`] implementations and a recording
//! observer so each test file doesn't have to re-define the same
//! boilerplate.

#![allow(clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use anyhow::Result;
use faro_cli::application::ports::{PageEndpoint, RefreshObserver};
use faro_common::{CycleOutcome, StatusToken};

// ── Document helpers ──────────────────────────────────────────────────────────

/// A minimal hosting page carrying the fallback token and both regions.
pub fn page(status: &str, aside: &str, main: &str) -> String {
    format!(
        r#"<html><body data-status="{status}"><aside>{aside}</aside><main>{main}</main></body></html>"#
    )
}

/// A page that carries only a `<main>` region.
pub fn page_without_aside() -> String {
    "<html><body><main>grid</main></body></html>".to_string()
}

// ── Scripted endpoint ─────────────────────────────────────────────────────────

/// Endpoint that replays scripted responses in order and counts calls.
///
/// A call with no scripted response left fails the test by returning an
/// error the cycle under test should never have triggered — combine with
/// the call counters to assert "this request was never issued".
#[derive(Default)]
pub struct ScriptedEndpoint {
    statuses: RefCell<VecDeque<Result<String>>>,
    documents: RefCell<VecDeque<Result<String>>>,
    status_calls: Cell<usize>,
    document_calls: Cell<usize>,
}

impl ScriptedEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next status-check response.
    pub fn with_status(self, response: Result<String>) -> Self {
        self.statuses.borrow_mut().push_back(response);
        self
    }

    /// Script the next document-fetch response.
    pub fn with_document(self, response: Result<String>) -> Self {
        self.documents.borrow_mut().push_back(response);
        self
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.get()
    }

    pub fn document_calls(&self) -> usize {
        self.document_calls.get()
    }
}

impl PageEndpoint for ScriptedEndpoint {
    async fn fetch_status_text(&self) -> Result<String> {
        self.status_calls.set(self.status_calls.get() + 1);
        self.statuses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("status check not expected in this test")))
    }

    async fn fetch_document(&self) -> Result<String> {
        self.document_calls.set(self.document_calls.get() + 1);
        self.documents
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("document fetch not expected in this test")))
    }
}

// ── Recording observer ────────────────────────────────────────────────────────

/// One observed narration event, in a directly comparable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    StatusChanged { previous: String, current: String },
    RegionsReplaced,
    CycleCompleted(CycleOutcome),
}

/// Observer that records every event in call order.
#[derive(Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.borrow().clone()
    }
}

impl RefreshObserver for RecordingObserver {
    fn status_changed(&self, previous: &StatusToken, current: &StatusToken) {
        self.events.borrow_mut().push(ObservedEvent::StatusChanged {
            previous: previous.as_str().to_string(),
            current: current.as_str().to_string(),
        });
    }

    fn regions_replaced(&self) {
        self.events.borrow_mut().push(ObservedEvent::RegionsReplaced);
    }

    fn cycle_completed(&self, outcome: CycleOutcome) {
        self.events
            .borrow_mut()
            .push(ObservedEvent::CycleCompleted(outcome));
    }
}

//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `faro_common` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use faro_common::{CycleOutcome, StatusToken};

// ── Page Endpoint Port ────────────────────────────────────────────────────────

/// The hosting page's two fixed resources, as one injected capability.
///
/// Each call resolves exactly once: `Ok(body)` only for a completed HTTP 200
/// response; `Err` for any other completed status, transport failure, or
/// timeout. Implementations enforce the refresh timeout per request. A
/// request that never completes resolves nothing — acceptable, since the
/// whole process is being torn down with it.
#[allow(async_fn_in_trait)]
pub trait PageEndpoint {
    /// Fetch the current status token as plain text (`GET /status/text/`).
    ///
    /// # Errors
    ///
    /// Returns an error on non-200 status, transport failure, or timeout.
    async fn fetch_status_text(&self) -> Result<String>;

    /// Fetch the root document as HTML text (`GET /`).
    ///
    /// # Errors
    ///
    /// Returns an error on non-200 status, transport failure, or timeout.
    async fn fetch_document(&self) -> Result<String>;
}

// ── Refresh Observer Port ─────────────────────────────────────────────────────

/// Abstracts progress narration so the refresh service can emit events
/// without depending on the Presentation layer. Sync trait — no async
/// needed. Failures are never reported through it; a failed cycle is
/// narrated only as its completed outcome.
pub trait RefreshObserver {
    /// The held status token moved from `previous` to `current`.
    fn status_changed(&self, previous: &StatusToken, current: &StatusToken);
    /// Both regions were replaced with freshly fetched content.
    fn regions_replaced(&self);
    /// A check cycle finished; the next one is about to be scheduled.
    fn cycle_completed(&self, outcome: CycleOutcome);
}

/// No-op observer for one-shot uses.
pub struct SilentObserver;

impl RefreshObserver for SilentObserver {
    fn status_changed(&self, _: &StatusToken, _: &StatusToken) {}
    fn regions_replaced(&self) {}
    fn cycle_completed(&self, _: CycleOutcome) {}
}

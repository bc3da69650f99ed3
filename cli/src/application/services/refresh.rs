//! Application service — the page refresh cycle.
//!
//! Imports only from `faro_common`, `crate::domain`, and
//! `crate::application::ports`. All I/O is routed through injected port
//! traits.

use std::time::Duration;

use faro_common::{CycleOutcome, Region, StatusToken};

use crate::application::ports::{PageEndpoint, RefreshObserver};
use crate::domain::page::{self, PageRegions};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Delay between the end of one check cycle and the start of the next.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(20);

/// Per-request timeout. Shorter than the refresh interval by contract, so a
/// hung request cannot outlive its cycle slot.
pub const REFRESH_TIMEOUT: Duration = Duration::from_secs(5);

// ── Agent ─────────────────────────────────────────────────────────────────────

/// Single-owner context for the poll-compare-swap loop.
///
/// Holds the last-known status token and the two live regions. The agent is
/// the only writer of this state, and cycles are strictly serialized (the
/// next check is only scheduled after the previous cycle's handling has
/// completed), so there is never more than one outstanding request and no
/// synchronization is needed.
#[derive(Debug)]
pub struct RefreshAgent {
    status: StatusToken,
    aside: Region,
    main: Region,
}

impl RefreshAgent {
    /// Locate both regions in the startup document and construct the agent.
    ///
    /// Returns `None` when either region is absent: the page does not
    /// support live refresh and the agent stays inert — no timer, no
    /// requests, ever. That is a no-op, not an error.
    #[must_use]
    pub fn bind(document: &str, fallback: StatusToken) -> Option<Self> {
        let PageRegions { aside, main } = page::locate_regions(document)?;
        Some(Self {
            status: fallback,
            aside,
            main,
        })
    }

    /// The currently held status token.
    #[must_use]
    pub fn status(&self) -> &StatusToken {
        &self.status
    }

    /// The currently held secondary region.
    #[must_use]
    pub fn aside(&self) -> &Region {
        &self.aside
    }

    /// The currently held primary region.
    #[must_use]
    pub fn main(&self) -> &Region {
        &self.main
    }

    /// Run one check cycle: fetch the status token, compare it against the
    /// held one, and on a change run the document-fetch sub-cycle.
    ///
    /// Every failure degrades to a no-op outcome — the next scheduled cycle
    /// is the retry. The held token only ever adopts a value returned by a
    /// successful check; an empty body counts as "returned the held value"
    /// (the page-supplied fallback takes over for an empty payload).
    pub async fn run_cycle(
        &mut self,
        endpoint: &impl PageEndpoint,
        observer: &impl RefreshObserver,
    ) -> CycleOutcome {
        let status = match endpoint.fetch_status_text().await {
            Ok(text) if !text.is_empty() => StatusToken::new(text),
            Ok(_) | Err(_) => self.status.clone(),
        };

        let outcome = if status == self.status {
            CycleOutcome::Unchanged
        } else {
            let previous = std::mem::replace(&mut self.status, status);
            observer.status_changed(&previous, &self.status);
            self.refresh_document(endpoint, observer).await
        };

        observer.cycle_completed(outcome);
        outcome
    }

    /// Fetch the root document and, if it carries both regions, replace the
    /// held ones wholesale. A transport failure and a document missing
    /// either region are the same outcome: no replacement, no error.
    async fn refresh_document(
        &mut self,
        endpoint: &impl PageEndpoint,
        observer: &impl RefreshObserver,
    ) -> CycleOutcome {
        let Ok(document) = endpoint.fetch_document().await else {
            return CycleOutcome::DocumentUnavailable;
        };
        let Some(PageRegions { aside, main }) = page::locate_regions(&document) else {
            return CycleOutcome::DocumentUnavailable;
        };

        self.aside = aside;
        self.main = main;
        observer.regions_replaced();
        CycleOutcome::Refreshed
    }
}

// ── Loop ──────────────────────────────────────────────────────────────────────

/// Drive the agent until the process is torn down: wait the refresh
/// interval, run one cycle, repeat.
///
/// The interval is measured from completion of the previous cycle's
/// handling, not from a wall-clock grid — a slow request simply delays the
/// next cycle instead of queueing catch-up checks. There is no cancellation
/// path and no retry cap; callers race this future against teardown.
pub async fn run(
    agent: &mut RefreshAgent,
    endpoint: &impl PageEndpoint,
    interval: Duration,
    observer: &impl RefreshObserver,
) -> std::convert::Infallible {
    loop {
        tokio::time::sleep(interval).await;
        agent.run_cycle(endpoint, observer).await;
    }
}

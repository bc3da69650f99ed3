//! Presentation-layer implementations of `RefreshObserver`.
//!
//! Wrap the terminal context (or stdout for `--json`) and implement the
//! `application::ports::RefreshObserver` trait so the refresh service can
//! narrate progress without depending on any presentation type directly.

use owo_colors::OwoColorize as _;

use faro_common::{CycleOutcome, RefreshEvent, StatusToken};

use crate::application::ports::RefreshObserver;
use crate::output::OutputContext;

// ── Human observer ────────────────────────────────────────────────────────────

/// Terminal observer that wraps an `OutputContext`.
///
/// Quiet cycles stay silent — only token changes and region swaps are worth
/// a line. Suppressed entirely when `ctx.quiet`.
pub struct HumanObserver<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanObserver<'a> {
    /// Create a new `HumanObserver` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl RefreshObserver for HumanObserver<'_> {
    fn status_changed(&self, previous: &StatusToken, current: &StatusToken) {
        if !self.ctx.quiet {
            println!(
                "  {} status {previous} {} {current}",
                "→".cyan(),
                "→".style(self.ctx.styles.dim),
            );
        }
    }

    fn regions_replaced(&self) {
        self.ctx.success("page regions refreshed");
    }

    fn cycle_completed(&self, outcome: CycleOutcome) {
        // An unavailable document is still not an error — the next cycle is
        // the retry — but it is worth narrating.
        if outcome == CycleOutcome::DocumentUnavailable {
            self.ctx.warn("page not refreshed yet; retrying next cycle");
        }
    }
}

// ── JSON observer ─────────────────────────────────────────────────────────────

/// Observer that prints one [`RefreshEvent`] JSON object per line.
pub struct JsonObserver;

impl JsonObserver {
    fn emit(event: &RefreshEvent) {
        // serde_json only fails on non-finite floats and non-string map
        // keys, neither of which appear in RefreshEvent.
        if let Ok(line) = serde_json::to_string(event) {
            println!("{line}");
        }
    }
}

impl RefreshObserver for JsonObserver {
    fn status_changed(&self, previous: &StatusToken, current: &StatusToken) {
        Self::emit(&RefreshEvent::status_changed(previous, current));
    }

    fn regions_replaced(&self) {
        Self::emit(&RefreshEvent::regions_replaced());
    }

    fn cycle_completed(&self, outcome: CycleOutcome) {
        Self::emit(&RefreshEvent::cycle_completed(outcome));
    }
}

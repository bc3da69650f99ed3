use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque server-side content version token.
///
/// Tokens are compared byte-for-byte and never parsed; whitespace is
/// significant. The empty token means "no token yet" — it is the fallback a
/// follower starts from when the hosting page carries none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusToken(String);

impl StatusToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty "no token yet" fallback.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for StatusToken {
    /// Renders the empty fallback as `(none)` for human output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// The two page regions subject to wholesale replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    /// The secondary region — the page's `<aside>` element.
    Aside,
    /// The primary region — the page's `<main>` element.
    Main,
}

impl RegionKind {
    /// The HTML tag name this region is located by.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Aside => "aside",
            Self::Main => "main",
        }
    }
}

/// One located page region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Which of the two regions this is.
    pub kind: RegionKind,
    /// Outer HTML, from the opening tag through the matching closing tag.
    pub html: String,
}

/// Result of one check cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleOutcome {
    /// The status token matched the held value, or the check failed.
    Unchanged,
    /// The token changed and both regions were replaced.
    Refreshed,
    /// The token changed but the document fetch yielded no usable regions.
    DocumentUnavailable,
}

/// Event emitted by the watch loop for machine-readable (`--json`) output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RefreshEvent {
    /// The held status token changed.
    StatusChanged {
        at: DateTime<Utc>,
        previous: String,
        current: String,
    },
    /// Both regions were replaced with fresh content.
    RegionsReplaced { at: DateTime<Utc> },
    /// A check cycle finished.
    CycleCompleted {
        at: DateTime<Utc>,
        outcome: CycleOutcome,
    },
}

impl RefreshEvent {
    /// Build a `status_changed` event stamped now.
    #[must_use]
    pub fn status_changed(previous: &StatusToken, current: &StatusToken) -> Self {
        Self::StatusChanged {
            at: Utc::now(),
            previous: previous.as_str().to_string(),
            current: current.as_str().to_string(),
        }
    }

    /// Build a `regions_replaced` event stamped now.
    #[must_use]
    pub fn regions_replaced() -> Self {
        Self::RegionsReplaced { at: Utc::now() }
    }

    /// Build a `cycle_completed` event stamped now.
    #[must_use]
    pub fn cycle_completed(outcome: CycleOutcome) -> Self {
        Self::CycleCompleted {
            at: Utc::now(),
            outcome,
        }
    }
}

//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. Only *setup* problems are errors;
//! a running refresh loop never surfaces one (failed cycles degrade to
//! "try again next cycle").

use thiserror::Error;

/// Errors raised while validating watch parameters before the loop starts.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Invalid base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error(
        "Refresh timeout ({timeout}s) must be shorter than the refresh interval ({interval}s)."
    )]
    TimeoutNotBelowInterval { timeout: u64, interval: u64 },
}

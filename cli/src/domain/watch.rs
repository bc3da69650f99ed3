//! Watch parameter validation — pure checks run before the loop starts.

use crate::domain::error::WatchError;

/// Validate that a base URL uses a supported scheme.
///
/// # Errors
///
/// Returns [`WatchError::InvalidBaseUrl`] for anything that is not
/// `http://` or `https://`.
pub fn validate_base_url(url: &str) -> Result<(), WatchError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(WatchError::InvalidBaseUrl(url.to_string()))
    }
}

/// Validate the interval/timeout pair.
///
/// The per-request timeout must stay strictly below the refresh interval,
/// so a hung request can never outlive its own cycle slot.
///
/// # Errors
///
/// Returns [`WatchError::TimeoutNotBelowInterval`] when the contract is
/// violated.
pub fn validate_cadence(interval_secs: u64, timeout_secs: u64) -> Result<(), WatchError> {
    if timeout_secs < interval_secs {
        Ok(())
    } else {
        Err(WatchError::TimeoutNotBelowInterval {
            timeout: timeout_secs,
            interval: interval_secs,
        })
    }
}

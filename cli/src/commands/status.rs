//! `faro status` — one-shot status token fetch.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::PageEndpoint;
use crate::application::services::refresh::REFRESH_TIMEOUT;
use crate::domain::validate_base_url;
use crate::infra::http::HttpPageEndpoint;

/// Arguments for the status command.
#[derive(Args)]
pub struct StatusArgs {
    /// Base URL of the status page, e.g. https://status.example.org
    #[arg(env = "FARO_BASE_URL")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REFRESH_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Run `faro status <BASE_URL>`.
///
/// Exposes the check-cycle primitive directly: one GET of the status
/// resource, printed raw (or as a JSON object with `--json`).
///
/// # Errors
///
/// Returns an error if the base URL is invalid, or the status endpoint is
/// unreachable or returns a non-200 response.
pub async fn run(args: &StatusArgs, json: bool) -> Result<()> {
    validate_base_url(&args.base_url)?;

    let endpoint = HttpPageEndpoint::new(&args.base_url, Duration::from_secs(args.timeout))?;
    let status = endpoint
        .fetch_status_text()
        .await
        .context("fetching status token")?;

    if json {
        println!("{}", serde_json::json!({ "status": status }));
    } else {
        println!("{}", status.trim_end());
    }
    Ok(())
}

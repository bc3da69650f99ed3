//! `faro watch` — follow a status page and keep its regions fresh.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::{PageEndpoint, RefreshObserver};
use crate::application::services::refresh::{
    self, REFRESH_INTERVAL, REFRESH_TIMEOUT, RefreshAgent,
};
use crate::domain::{page, validate_base_url, validate_cadence};
use crate::infra::http::HttpPageEndpoint;
use crate::output::OutputContext;
use crate::output::observer::{HumanObserver, JsonObserver};

/// Arguments for the watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Base URL of the status page, e.g. https://status.example.org
    #[arg(env = "FARO_BASE_URL")]
    pub base_url: String,

    /// Seconds to wait between check cycles
    #[arg(long, default_value_t = REFRESH_INTERVAL.as_secs())]
    pub interval: u64,

    /// Per-request timeout in seconds (must stay below the interval)
    #[arg(long, default_value_t = REFRESH_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Run `faro watch <BASE_URL>`.
///
/// Fetches the startup document once (the page-load analog), binds the
/// agent to its regions, then runs check cycles until interrupted. A page
/// without both regions leaves the agent inert: the command reports that
/// and exits successfully — the no-op is not an error.
///
/// # Errors
///
/// Returns an error if the arguments are invalid or the startup document
/// cannot be fetched.
pub async fn run(ctx: &OutputContext, args: &WatchArgs, json: bool) -> Result<()> {
    validate_base_url(&args.base_url)?;
    validate_cadence(args.interval, args.timeout)?;

    let endpoint = HttpPageEndpoint::new(&args.base_url, Duration::from_secs(args.timeout))?;
    let document = endpoint
        .fetch_document()
        .await
        .context("fetching startup document")?;

    let fallback = page::fallback_status(&document).unwrap_or_default();
    let Some(mut agent) = RefreshAgent::bind(&document, fallback) else {
        ctx.info("page has no <aside>/<main> regions; nothing to follow");
        return Ok(());
    };

    let interval = Duration::from_secs(args.interval);
    if json {
        follow(&mut agent, &endpoint, interval, &JsonObserver).await
    } else {
        ctx.kv("following", &args.base_url);
        ctx.kv("status", &agent.status().to_string());
        follow(&mut agent, &endpoint, interval, &HumanObserver::new(ctx)).await
    }
}

/// Race the endless refresh loop against Ctrl-C (the teardown analog of
/// navigating away from the page).
async fn follow(
    agent: &mut RefreshAgent,
    endpoint: &impl PageEndpoint,
    interval: Duration,
    observer: &impl RefreshObserver,
) -> Result<()> {
    tokio::select! {
        never = refresh::run(agent, endpoint, interval, observer) => match never {},
        interrupt = tokio::signal::ctrl_c() => {
            interrupt.context("waiting for interrupt")?;
        }
    }
    Ok(())
}

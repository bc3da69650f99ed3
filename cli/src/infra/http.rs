//! HTTP infrastructure — implements `PageEndpoint` using `reqwest`.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};

use crate::application::ports::PageEndpoint;

/// Production endpoint performing real HTTP requests against the hosting
/// page. Every request carries the fixed refresh timeout.
#[derive(Debug, Clone)]
pub struct HttpPageEndpoint {
    client: Client,
    base_url: String,
}

impl HttpPageEndpoint {
    /// Build an endpoint for `base_url` with `timeout` applied per request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_base(base_url),
        })
    }

    /// GET `path` under the base URL; the body is returned only for a
    /// completed HTTP 200 — not the whole 2xx class.
    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{base}{path}", base = self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?;

        anyhow::ensure!(
            response.status() == StatusCode::OK,
            "unexpected status {status} from {url}",
            status = response.status(),
        );

        response
            .text()
            .await
            .with_context(|| format!("reading body from {url}"))
    }
}

impl PageEndpoint for HttpPageEndpoint {
    async fn fetch_status_text(&self) -> Result<String> {
        self.get_text("/status/text/").await
    }

    async fn fetch_document(&self) -> Result<String> {
        self.get_text("/").await
    }
}

/// Strip trailing slashes so request paths join without doubling.
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

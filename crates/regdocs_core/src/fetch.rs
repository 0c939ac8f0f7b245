use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;

const DEFAULT_USER_AGENT: &str = "regdocs/0.1 (+https://developers.cardano.org)";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Blocking HTTP client for raw wiki content. Built once and shared across
/// page workers; no retries, the first failure aborts the run.
pub struct PageClient {
    client: Client,
    user_agent: String,
}

impl PageClient {
    pub fn new() -> Result<Self> {
        let timeout_ms = env::var("REGDOCS_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let user_agent =
            env::var("REGDOCS_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, user_agent })
    }

    pub fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", self.user_agent.clone())
            .send()
            .with_context(|| format!("failed to fetch {url}"))?;
        let status = response.status();
        if !status.is_success() {
            bail!("HTTP {} while fetching {}", status.as_u16(), url);
        }
        response
            .text()
            .with_context(|| format!("failed to read response body from {url}"))
    }
}

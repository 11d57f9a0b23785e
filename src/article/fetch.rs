//! HTTP retrieval of article pages.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::FetchSettings;
use crate::error::TrackerError;

/// Blocking HTTP fetcher with a fixed user agent and timeout. No retries.
pub struct ArticleFetcher {
    client: Client,
}

impl ArticleFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs));
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// GET `url` and return the body text. Transport errors, non-2xx
    /// statuses and an empty body are failures.
    pub fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching article from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("request failed for {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::FetchError(format!("{} returned {}", url, status)).into());
        }

        let body = response
            .text()
            .with_context(|| format!("failed reading response for {}", url))?;
        if body.is_empty() {
            return Err(TrackerError::FetchError(format!("{} returned an empty body", url)).into());
        }
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

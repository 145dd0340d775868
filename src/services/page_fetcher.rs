//! Page Fetcher for history-mcp.
//!
//! Best-effort batch fetch: every URL is requested in order with a blocking
//! GET, and only successful responses make it into the result. Failures are
//! logged and otherwise dropped.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::types::errors::{ConfigError, FetchError};
use crate::types::page::PageContents;
use crate::types::settings::ServerConfig;

/// Trait defining page fetch operations.
pub trait PageFetcherTrait {
    /// Fetches each URL and returns the bodies of the ones that succeeded.
    fn fetch_pages(&self, urls: &[String]) -> PageContents;
}

/// Sequential page fetcher over a shared blocking HTTP client.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a fetcher with default client settings, optionally bounding
    /// each request with `timeout`.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        Self::new(config.fetch_timeout_secs.map(Duration::from_secs))
    }

    /// Fetches one URL. A non-2xx status counts as a failure.
    pub fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

impl PageFetcherTrait for PageFetcher {
    fn fetch_pages(&self, urls: &[String]) -> PageContents {
        let mut pages = PageContents::new();
        for url in urls {
            match self.fetch_page(url) {
                Ok(content) => {
                    debug!(url = %url, bytes = content.len(), "fetched page");
                    pages.insert(url.clone(), content);
                }
                Err(e) => debug!(url = %url, error = %e, "skipping page"),
            }
        }
        pages
    }
}

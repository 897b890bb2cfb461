//! HTTP source fetcher.
//!
//! Thin `reqwest` wrapper. Status and size checks are pure functions so they
//! can be tested without a network.

use std::time::Duration;

use reqwest::StatusCode;

use super::config::FetchConfig;
use super::{FetchError, SourceFetch, check_size};

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpFetcher {
    http: reqwest::Client,
    max_source_bytes: u64,
}

impl HttpFetcher {
    /// Build a fetcher with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::HttpClientBuild`] if the TLS backend or client
    /// cannot be initialised.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| FetchError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, max_source_bytes: config.max_source_bytes })
    }
}

#[async_trait::async_trait]
impl SourceFetch for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .get(location)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        check_status(response.status())?;
        if let Some(length) = response.content_length() {
            check_size(length, self.max_source_bytes)?;
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        check_size(text.len() as u64, self.max_source_bytes)?;

        tracing::debug!(url = location, bytes = text.len(), "fetched source over http");
        Ok(text)
    }
}

// =============================================================================
// CHECKS
// =============================================================================

/// Map a non-success status to [`FetchError::Status`] with its reason phrase.
fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    Err(FetchError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown Status").to_owned(),
    })
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

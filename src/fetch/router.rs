//! Location routing: remote URL or local path.

use std::path::PathBuf;

use reqwest::Url;

use super::config::FetchConfig;
use super::file::FileFetcher;
use super::http::HttpFetcher;
use super::{FetchError, SourceFetch};

/// Where a requested source actually lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Remote(Url),
    Local(PathBuf),
}

/// Production [`SourceFetch`]: dispatches to HTTP or the filesystem.
pub struct SourceRouter {
    http: HttpFetcher,
    file: FileFetcher,
    base_url: Option<Url>,
}

impl SourceRouter {
    /// Build both fetchers from one config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the configured
    /// base URL does not parse.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let base_url = match &config.base_url {
            Some(raw) => Some(Url::parse(raw).map_err(|e| FetchError::ConfigParse(format!("base URL '{raw}': {e}")))?),
            None => None,
        };
        Ok(Self { http: HttpFetcher::new(config)?, file: FileFetcher::new(config), base_url })
    }

    /// Decide where `location` points.
    ///
    /// `http(s)://` locations are taken as-is. Anything else is joined onto
    /// the base URL when one is configured, the way a browser resolves a
    /// relative fetch against the page, and treated as a local path otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidLocation`] if a URL cannot be parsed or
    /// joined.
    pub fn resolve(&self, location: &str) -> Result<SourceLocation, FetchError> {
        if is_remote(location) {
            return Url::parse(location)
                .map(SourceLocation::Remote)
                .map_err(|e| invalid_location(location, e));
        }
        if let Some(base) = &self.base_url {
            return base
                .join(location)
                .map(SourceLocation::Remote)
                .map_err(|e| invalid_location(location, e));
        }
        let path = location.strip_prefix("file://").unwrap_or(location);
        Ok(SourceLocation::Local(PathBuf::from(path)))
    }
}

#[async_trait::async_trait]
impl SourceFetch for SourceRouter {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        match self.resolve(location)? {
            SourceLocation::Remote(url) => self.http.fetch(url.as_str()).await,
            SourceLocation::Local(path) => self.file.fetch(&path.to_string_lossy()).await,
        }
    }
}

fn invalid_location(location: &str, err: impl std::fmt::Display) -> FetchError {
    FetchError::InvalidLocation { location: location.to_owned(), message: err.to_string() }
}

fn is_remote(location: &str) -> bool {
    let lower = location.get(..8).unwrap_or(location).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

//! Source fetching: the single async boundary of a generation request.
//!
//! DESIGN
//! ======
//! `SourceFetch` is the seam between the diagram pipeline and the outside
//! world. `SourceRouter` is the production implementation: it sends
//! `http(s)://` locations (and relative paths, when a base URL is configured)
//! to `HttpFetcher` and everything else to `FileFetcher`. Tests mock the
//! trait directly.

pub mod config;
pub mod file;
pub mod http;
pub mod router;

pub use config::FetchConfig;
pub use file::FileFetcher;
pub use http::HttpFetcher;
pub use router::{SourceLocation, SourceRouter};

use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while retrieving source text.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    /// The request never produced a response (DNS, TLS, timeout, reset).
    #[error("request failed: {0}")]
    Request(String),

    /// A local file could not be read.
    #[error("{path}: {message}")]
    Io { path: String, message: String },

    /// The location could not be turned into a URL or path.
    #[error("invalid source location `{location}`: {message}")]
    InvalidLocation { location: String, message: String },

    /// The body is larger than the configured limit.
    #[error("source is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Status { .. } => "E_FETCH_STATUS",
            Self::Request(_) => "E_FETCH_REQUEST",
            Self::Io { .. } => "E_FETCH_IO",
            Self::InvalidLocation { .. } => "E_FETCH_LOCATION",
            Self::TooLarge { .. } => "E_FETCH_TOO_LARGE",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// FETCH TRAIT
// =============================================================================

/// Retrieves raw source text for a path or URL. Enables mocking in tests.
#[async_trait::async_trait]
pub trait SourceFetch: Send + Sync {
    /// Fetch the full text behind `location`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the location is invalid, the transport
    /// fails, or the resource answers with a non-success status.
    async fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// Reject bodies over `limit` bytes.
pub(crate) fn check_size(size: u64, limit: u64) -> Result<(), FetchError> {
    if size > limit {
        return Err(FetchError::TooLarge { size, limit });
    }
    Ok(())
}

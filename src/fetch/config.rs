//! Fetch configuration parsed from environment variables.

use super::FetchError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for FetchTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Relative paths are resolved against this URL when set.
    pub base_url: Option<String>,
    pub timeouts: FetchTimeouts,
    pub max_source_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { base_url: None, timeouts: FetchTimeouts::default(), max_source_bytes: DEFAULT_MAX_SOURCE_BYTES }
    }
}

impl FetchConfig {
    /// Build typed fetch config from environment variables.
    ///
    /// Optional:
    /// - `CODEBOARD_BASE_URL`: base that relative paths resolve against
    /// - `CODEBOARD_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CODEBOARD_CONNECT_TIMEOUT_SECS`: default 10
    /// - `CODEBOARD_MAX_SOURCE_BYTES`: default 2 MiB
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ConfigParse`] if `CODEBOARD_BASE_URL` is set but
    /// is not an absolute `http(s)` URL.
    pub fn from_env() -> Result<Self, FetchError> {
        let base_url = match std::env::var("CODEBOARD_BASE_URL") {
            Ok(raw) if !raw.trim().is_empty() => Some(normalize_base_url(&raw)?),
            _ => None,
        };
        let timeouts = FetchTimeouts {
            request_secs: env_parse("CODEBOARD_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("CODEBOARD_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let max_source_bytes = env_parse("CODEBOARD_MAX_SOURCE_BYTES", DEFAULT_MAX_SOURCE_BYTES);

        Ok(Self { base_url, timeouts, max_source_bytes })
    }

    /// Replace the base URL, validating it the same way `from_env` does.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ConfigParse`] for anything but an absolute
    /// `http(s)` URL.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, FetchError> {
        self.base_url = Some(normalize_base_url(raw)?);
        Ok(self)
    }
}

/// Validate a base URL and make sure it ends in `/`, so joining `src/a.ts`
/// appends to the last segment instead of replacing it.
fn normalize_base_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim();
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| FetchError::ConfigParse(format!("invalid CODEBOARD_BASE_URL '{trimmed}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::ConfigParse(format!(
            "unsupported CODEBOARD_BASE_URL scheme '{}' (expected 'http' or 'https')",
            url.scheme()
        )));
    }

    let mut normalized = url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

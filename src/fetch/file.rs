//! Local filesystem source fetcher.

use std::path::Path;

use super::config::FetchConfig;
use super::{FetchError, SourceFetch, check_size};

pub struct FileFetcher {
    max_source_bytes: u64,
}

impl FileFetcher {
    #[must_use]
    pub fn new(config: &FetchConfig) -> Self {
        Self { max_source_bytes: config.max_source_bytes }
    }
}

#[async_trait::async_trait]
impl SourceFetch for FileFetcher {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        let path = Path::new(location.strip_prefix("file://").unwrap_or(location));
        let io_error = |e: std::io::Error| FetchError::Io { path: path.display().to_string(), message: e.to_string() };

        let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
        if !metadata.is_file() {
            return Err(FetchError::Io { path: path.display().to_string(), message: "not a regular file".into() });
        }
        check_size(metadata.len(), self.max_source_bytes)?;

        let text = tokio::fs::read_to_string(path).await.map_err(io_error)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read source from disk");
        Ok(text)
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

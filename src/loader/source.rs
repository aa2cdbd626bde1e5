//! CSV Sources
//!
//! Where the board's CSV text comes from: a local directory or a remote
//! base URL. Both resolve a relative file name the way a page resolves a
//! relative fetch.

use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::{LoadError, LoadResult};

/// Common trait for everything that can hand out file contents as text
#[async_trait]
pub trait Source: Send + Sync {
    /// Short name used in logs and health output
    fn kind(&self) -> &'static str;

    /// Fetch the full text of `path`, relative to the source root
    async fn fetch_text(&self, path: &str) -> LoadResult<String>;
}

/// Reads files from a local directory
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl Source for FileSource {
    fn kind(&self) -> &'static str {
        "file"
    }

    async fn fetch_text(&self, path: &str) -> LoadResult<String> {
        let full_path = self.root.join(path);
        tracing::debug!(path = %full_path.display(), "Reading CSV file");

        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| LoadError::Io {
                path: full_path.display().to_string(),
                source,
            })
    }
}

/// Fetches files over HTTP relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source without a request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a source whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> LoadResult<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| LoadError::Http {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a relative file name against the base URL
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Source for HttpSource {
    fn kind(&self) -> &'static str {
        "http"
    }

    async fn fetch_text(&self, path: &str) -> LoadResult<String> {
        let url = self.url_for(path);
        tracing::debug!(url = %url, "Fetching CSV file");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LoadError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| LoadError::Http { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_source_reads_relative_path() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("goals.csv"), "h1,h2,h3\nA,b.png,true").unwrap();

        let source = FileSource::new(dir.path());
        let text = source.fetch_text("goals.csv").await.unwrap();

        assert_eq!(text, "h1,h2,h3\nA,b.png,true");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path());

        let err = source.fetch_text("missing.csv").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_http_source_url_joining() {
        let source = HttpSource::new("http://localhost:8000/board/");

        assert_eq!(source.base_url(), "http://localhost:8000/board");
        assert_eq!(source.url_for("goals.csv"), "http://localhost:8000/board/goals.csv");
        assert_eq!(source.url_for("/updates.csv"), "http://localhost:8000/board/updates.csv");
    }

    #[test]
    fn test_status_error_not_found() {
        let err = LoadError::Status {
            url: "http://localhost/goals.csv".to_string(),
            status: 404,
        };
        assert!(err.is_not_found());
    }
}

//! Loader error types

use thiserror::Error;

/// Errors that can occur while fetching a CSV file
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading a local file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request itself failed (connect, timeout, body)
    #[error("Request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Request for {url} returned status {status}")]
    Status { url: String, status: u16 },
}

impl LoadError {
    /// Whether the error means the file does not exist at the source
    pub fn is_not_found(&self) -> bool {
        match self {
            LoadError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            LoadError::Status { status, .. } => *status == 404,
            LoadError::Http { .. } => false,
        }
    }
}

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

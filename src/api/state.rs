//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::board::Board;
use crate::config::{Config, ServerConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Board used to render pages and load data
    pub board: Arc<Board>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Directory served under `/assets`
    pub assets_dir: PathBuf,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(board: Arc<Board>, config: ServerConfig, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            board,
            config: Arc::new(config),
            assets_dir: assets_dir.into(),
            start_time: Instant::now(),
        }
    }

    /// Build state from the full configuration
    pub fn from_config(board: Arc<Board>, config: &Config) -> Self {
        let assets_dir = PathBuf::from(&config.source.root_dir).join("assets");
        Self::new(board, config.server.clone(), assets_dir)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

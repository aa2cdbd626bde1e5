//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::{DEFAULT_IMAGE_PREFIX, DEFAULT_MAX_CELLS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to load and how to render it
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_goals_file")]
    pub goals_file: String,

    #[serde(default = "default_updates_file")]
    pub updates_file: String,

    /// Goals beyond this many are not shown
    #[serde(default = "default_max_goals")]
    pub max_goals: usize,

    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,

    #[serde(default = "default_grid_id")]
    pub grid_id: String,

    #[serde(default = "default_events_id")]
    pub events_id: String,

    /// Append a placeholder to a section whose pipeline failed
    #[serde(default)]
    pub show_errors: bool,
}

fn default_goals_file() -> String {
    "goals.csv".to_string()
}

fn default_updates_file() -> String {
    "updates.csv".to_string()
}

fn default_max_goals() -> usize {
    DEFAULT_MAX_CELLS
}

fn default_image_prefix() -> String {
    DEFAULT_IMAGE_PREFIX.to_string()
}

fn default_grid_id() -> String {
    "grid".to_string()
}

fn default_events_id() -> String {
    "events".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            goals_file: default_goals_file(),
            updates_file: default_updates_file(),
            max_goals: default_max_goals(),
            image_prefix: default_image_prefix(),
            grid_id: default_grid_id(),
            events_id: default_events_id(),
            show_errors: false,
        }
    }
}

/// Host page appearance
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_lang")]
    pub lang: String,

    #[serde(default = "default_stylesheet")]
    pub stylesheet: Option<String>,

    #[serde(default = "default_description_heading")]
    pub description_heading: String,

    #[serde(default = "default_time_heading")]
    pub time_heading: String,
}

fn default_title() -> String {
    "Goals".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_stylesheet() -> Option<String> {
    Some("assets/style.css".to_string())
}

fn default_description_heading() -> String {
    "Update".to_string()
}

fn default_time_heading() -> String {
    "Time".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            lang: default_lang(),
            stylesheet: default_stylesheet(),
            description_heading: default_description_heading(),
            time_heading: default_time_heading(),
        }
    }
}

/// Where CSV files and assets are read from
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Local directory holding the CSV files and `assets/`
    #[serde(default = "default_root_dir")]
    pub root_dir: String,

    /// When set, CSV files are fetched over HTTP from this URL instead
    #[serde(default)]
    pub base_url: Option<String>,

    /// HTTP request timeout; unset means wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_root_dir() -> String {
    ".".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            base_url: None,
            request_timeout_secs: None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("goalboard").join("config.toml")),
            Some(PathBuf::from("./goalboard.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Source overrides
        if let Some(root) = var("GOALBOARD_ROOT") {
            self.source.root_dir = root;
        }
        if let Some(url) = var("GOALBOARD_BASE_URL") {
            self.source.base_url = Some(url).filter(|u| !u.is_empty());
        }

        // Board overrides
        if let Some(max) = var("GOALBOARD_MAX_GOALS").and_then(|s| s.parse().ok()) {
            self.board.max_goals = max;
        }

        // Server overrides
        if let Some(host) = var("GOALBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("GOALBOARD_PORT").and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }

        // Logging overrides
        if let Some(level) = var("GOALBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("GOALBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Goalboard Configuration
#
# Environment variables override these settings:
# - GOALBOARD_ROOT
# - GOALBOARD_BASE_URL
# - GOALBOARD_MAX_GOALS
# - GOALBOARD_HOST
# - GOALBOARD_PORT
# - GOALBOARD_LOG_LEVEL
# - GOALBOARD_LOG_FORMAT

[board]
# CSV files, relative to the source root
goals_file = "goals.csv"
updates_file = "updates.csv"

# Goals beyond this many are not shown (5x5 grid)
max_goals = 25

# Prefix joined with each goal's image file name
image_prefix = "assets/images/"

# Ids of the mount points in the page
grid_id = "grid"
events_id = "events"

# Show a placeholder in a section that failed to load
show_errors = false

[page]
title = "Goals"
lang = "en"
stylesheet = "assets/style.css"
description_heading = "Update"
time_heading = "Time"

[source]
# Directory holding the CSV files and the assets/ directory
root_dir = "."

# Fetch CSV files over HTTP instead of from root_dir
# base_url = "https://example.com/board"

# HTTP request timeout in seconds (default: no timeout)
# request_timeout_secs = 10

[server]
host = "0.0.0.0"
port = 8080

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

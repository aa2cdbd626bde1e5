//! # Goalboard
//!
//! Renders a grid of goals and a timeline of updates from two small CSV
//! files into an HTML page.
//!
//! ## Modules
//!
//! - [`loader`]: CSV sources and record parsing
//! - [`dom`]: Element tree and host document
//! - [`render`]: Grid cells and table rows
//! - [`board`]: Runs both pipelines and mounts them into a document
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use goalboard::{Board, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let board = Board::from_config(&Config::default())?;
//!
//!     let (doc, report) = board.render_page().await;
//!     println!("{} goals, {} updates", report.goals.count(), report.timeline.count());
//!     println!("{}", doc.to_html());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod dom;
pub mod loader;
pub mod render;

// Re-export top-level types for convenience
pub use board::{Board, PipelineOutcome, RenderReport};

pub use config::{
    BoardConfig, Config, ConfigError, LoggingConfig, PageConfig, ServerConfig, SourceConfig,
};

pub use dom::{Document, Element};

pub use loader::{Event, FileSource, Goal, HttpSource, LoadError, Source};

pub use render::{GoalRenderer, RenderError};

pub use api::{build_router, serve, ApiError, AppState};

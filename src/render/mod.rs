//! Rendering
//!
//! Converts parsed records into elements and appends them to explicitly
//! passed containers.
//!
//! - [`goals`]: grid cells for `goals.csv`
//! - [`timeline`]: table rows for `updates.csv`

pub mod goals;
pub mod timeline;

pub use goals::{append_cells_to_grid, GoalRenderer, DEFAULT_IMAGE_PREFIX, DEFAULT_MAX_CELLS};
pub use timeline::{
    append_rows_to_table, convert_timeline_to_table_rows, create_cell_with_content,
    create_table_row,
};

use thiserror::Error;

use crate::loader::LoadError;

/// Errors that abort a single rendering pipeline
#[derive(Error, Debug)]
pub enum RenderError {
    /// The CSV file could not be fetched
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// The host document has no element with the expected id
    #[error("Container element #{0} not found in document")]
    MissingContainer(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

//! Document model
//!
//! Owned element tree the renderers build and the orchestration mounts into.

mod document;
mod element;

pub use document::Document;
pub use element::{escape_attribute, escape_text, Element};

//! Record types parsed from the board's CSV files
//!
//! - `Goal`: one line of `goals.csv` (`description,image,done`)
//! - `Event`: one line of `updates.csv` (`description,time`)
//!
//! Fields are taken positionally. Missing fields become empty strings and
//! extra fields are ignored.

use serde::Serialize;

/// A record that can be built from the positional fields of one CSV line
pub trait FromFields: Sized {
    /// Build the record from a line's fields, in column order
    fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>;
}

/// A single goal shown as one grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    /// Caption, also used as the image's alt text
    pub description: String,
    /// Image file name, relative to the configured image prefix
    pub image: String,
    /// Whether the goal has been completed
    pub done: bool,
}

impl Goal {
    pub fn new(description: impl Into<String>, image: impl Into<String>, done: bool) -> Self {
        Self {
            description: description.into(),
            image: image.into(),
            done,
        }
    }
}

impl FromFields for Goal {
    fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let description = fields.next().unwrap_or_default();
        let image = fields.next().unwrap_or_default();
        // Only the exact literal counts, no trimming or case folding
        let done = fields.next() == Some("true");

        Self::new(description, image, done)
    }
}

/// A single timeline entry shown as one table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// What happened
    pub description: String,
    /// When it happened, as free text
    pub time: String,
}

impl Event {
    pub fn new(description: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            time: time.into(),
        }
    }
}

impl FromFields for Event {
    fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let description = fields.next().unwrap_or_default();
        let time = fields.next().unwrap_or_default();

        Self::new(description, time)
    }
}

//! CSV Loader
//!
//! Fetches the board's CSV files from a [`Source`] and turns each line into a
//! typed record.
//!
//! The format is deliberately minimal: the first line is a header and is
//! always dropped, fields are split on commas with no quoting, and columns
//! are read by position.

mod error;
mod source;
mod types;

pub use error::{LoadError, LoadResult};
pub use source::{FileSource, HttpSource, Source};
pub use types::{Event, FromFields, Goal};

/// Parse CSV text into records, discarding the header line
///
/// The first line is dropped by position, whatever it contains (even when
/// it is blank). Only `\n` ends a line; one trailing `\r` per line is
/// stripped so CRLF files read the same as LF files. Blank lines anywhere
/// after the header are skipped. A line that cannot be read as CSV is
/// skipped with a warning rather than failing the whole file.
pub fn parse_records<T: FromFields>(text: &str) -> Vec<T> {
    let body = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quoting(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();

    for result in reader.records() {
        match result {
            Ok(record) => {
                let last = record.len().saturating_sub(1);
                let fields: Vec<&str> = record
                    .iter()
                    .enumerate()
                    .map(|(i, field)| if i == last { strip_cr(field) } else { field })
                    .collect();

                // A CRLF blank line reads as a single "\r" field
                if fields.len() == 1 && fields[0].is_empty() {
                    continue;
                }

                records.push(T::from_fields(fields));
            }
            Err(e) => {
                // Positions are relative to the body; the header is line 1
                tracing::warn!(
                    line = ?e.position().map(|p| p.line() + 1),
                    error = %e,
                    "Skipping unreadable CSV line"
                );
            }
        }
    }

    records
}

fn strip_cr(field: &str) -> &str {
    field.strip_suffix('\r').unwrap_or(field)
}

/// Parse the contents of `goals.csv`
pub fn parse_goals(text: &str) -> Vec<Goal> {
    parse_records(text)
}

/// Parse the contents of `updates.csv`
pub fn parse_events(text: &str) -> Vec<Event> {
    parse_records(text)
}

/// Fetch and parse the goals file
pub async fn load_goals(source: &dyn Source, path: &str) -> LoadResult<Vec<Goal>> {
    let text = source.fetch_text(path).await?;
    let goals = parse_goals(&text);

    tracing::debug!(path = %path, count = goals.len(), "Loaded goals");
    Ok(goals)
}

/// Fetch and parse the timeline file
pub async fn load_timeline(source: &dyn Source, path: &str) -> LoadResult<Vec<Event>> {
    let text = source.fetch_text(path).await?;
    let events = parse_events(&text);

    tracing::debug!(path = %path, count = events.len(), "Loaded timeline");
    Ok(events)
}

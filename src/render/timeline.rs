//! Timeline Rendering
//!
//! Every event becomes a `tr` with a description cell followed by a time
//! cell. Unlike the grid there is no limit on the number of rows.

use crate::dom::Element;
use crate::loader::Event;

pub fn create_cell_with_content(content: &str) -> Element {
    Element::new("td").text(content)
}

pub fn create_table_row(event: &Event) -> Element {
    Element::new("tr")
        .child(create_cell_with_content(&event.description))
        .child(create_cell_with_content(&event.time))
}

pub fn convert_timeline_to_table_rows(events: &[Event]) -> Vec<Element> {
    events.iter().map(create_table_row).collect()
}

/// Append rows to the table body, preserving their order
pub fn append_rows_to_table(table_body: &mut Element, rows: Vec<Element>) {
    table_body.extend(rows);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cells_in_order() {
        let row = create_table_row(&Event::new("Started", "2024-01-01"));

        assert_eq!(row.tag(), "tr");
        assert_eq!(row.children().len(), 2);
        assert_eq!(row.children()[0].tag(), "td");
        assert_eq!(row.children()[0].text_content(), "Started");
        assert_eq!(row.children()[1].text_content(), "2024-01-01");
    }

    #[test]
    fn test_no_truncation() {
        let events: Vec<Event> = (0..100)
            .map(|i| Event::new(format!("Update {}", i), format!("day {}", i)))
            .collect();

        assert_eq!(convert_timeline_to_table_rows(&events).len(), 100);
    }

    #[test]
    fn test_append_rows() {
        let mut body = Element::new("tbody").attr("id", "events");
        let rows = convert_timeline_to_table_rows(&[
            Event::new("Started", "2024-01-01"),
            Event::new("Ended", "2024-02-01"),
        ]);

        append_rows_to_table(&mut body, rows);

        assert_eq!(
            body.to_html(),
            "<tbody id=\"events\"><tr><td>Started</td><td>2024-01-01</td></tr>\
             <tr><td>Ended</td><td>2024-02-01</td></tr></tbody>"
        );
    }
}

//! Host document
//!
//! The page the board renders into. It provides the two mount points the
//! pipelines need: a grid container for goal cells and a table body for
//! timeline rows.

use super::element::Element;
use crate::config::PageConfig;

/// A complete HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap an existing `html` element
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Build the board page with a grid container and an events table body
    pub fn board_page(page: &PageConfig, grid_id: &str, events_id: &str) -> Self {
        let mut head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(page.title.as_str()));

        if let Some(stylesheet) = page.stylesheet.as_deref().filter(|s| !s.is_empty()) {
            head.append(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", stylesheet),
            );
        }

        let timeline = Element::new("table")
            .class("timeline")
            .child(
                Element::new("thead").child(
                    Element::new("tr")
                        .child(Element::new("th").text(page.description_heading.as_str()))
                        .child(Element::new("th").text(page.time_heading.as_str())),
                ),
            )
            .child(Element::new("tbody").attr("id", events_id));

        let body = Element::new("body").child(
            Element::new("main")
                .child(Element::new("h1").text(page.title.as_str()))
                .child(Element::new("div").attr("id", grid_id).class("grid"))
                .child(timeline),
        );

        Self::new(
            Element::new("html")
                .attr("lang", page.lang.as_str())
                .child(head)
                .child(body),
        )
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    /// Serialize the page, including the doctype
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.root.to_html())
    }
}

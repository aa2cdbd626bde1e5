//! Element tree
//!
//! A small owned element type with the handful of operations the board
//! needs: attributes, class names, text content, child appending, lookup by
//! id and HTML serialization.

use std::fmt::Write;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A single element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    /// Attributes in insertion order
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder method: set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Replace the whole class attribute
    pub fn set_class_name(&mut self, class_name: impl Into<String>) {
        self.set_attribute("class", class_name);
    }

    /// Builder method: set the class attribute
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.set_class_name(class_name);
        self
    }

    pub fn class_list(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.class_list().contains(&class_name)
    }

    /// Set the element's own text, which is rendered before its children
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Builder method: set text content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text_content(text);
        self
    }

    /// Text of this element and all descendants, in document order
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Builder method: append a child
    pub fn child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    /// Append several children, preserving their order
    pub fn extend<I: IntoIterator<Item = Element>>(&mut self, children: I) {
        self.children.extend(children);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Depth-first search for the element carrying `id`, including self
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_by_id_mut(id))
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Serialize this element and its subtree to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&escape_text(text));
        }
        for child in &self.children {
            child.write_html(out);
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text content for use between tags
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_order_and_replace() {
        let mut img = Element::new("img").attr("src", "a.png").attr("alt", "A");
        img.set_attribute("src", "b.png");

        assert_eq!(img.attribute("src"), Some("b.png"));
        assert_eq!(img.to_html(), r#"<img src="b.png" alt="A">"#);
    }

    #[test]
    fn test_class_list() {
        let cell = Element::new("div").class("cell done");

        assert_eq!(cell.class_list(), vec!["cell", "done"]);
        assert!(cell.has_class("done"));
        assert!(!cell.has_class("cel"));
    }

    #[test]
    fn test_text_is_escaped() {
        let td = Element::new("td").text("Fish & <chips>");
        assert_eq!(td.to_html(), "<td>Fish &amp; &lt;chips&gt;</td>");
    }

    #[test]
    fn test_attribute_is_escaped() {
        let img = Element::new("img").attr("alt", r#"say "hi""#);
        assert_eq!(img.to_html(), r#"<img alt="say &quot;hi&quot;">"#);
    }

    #[test]
    fn test_nested_serialization_and_text_content() {
        let row = Element::new("tr")
            .child(Element::new("td").text("Started"))
            .child(Element::new("td").text("2024-01-01"));

        assert_eq!(row.to_html(), "<tr><td>Started</td><td>2024-01-01</td></tr>");
        assert_eq!(row.text_content(), "Started2024-01-01");
    }

    #[test]
    fn test_find_by_id() {
        let mut root = Element::new("body").child(
            Element::new("main").child(Element::new("div").attr("id", "grid")),
        );

        assert!(root.find_by_id("grid").is_some());
        assert!(root.find_by_id("events").is_none());

        root.find_by_id_mut("grid")
            .unwrap()
            .append(Element::new("div").class("cell"));

        assert_eq!(root.find_by_id("grid").unwrap().children().len(), 1);
    }
}

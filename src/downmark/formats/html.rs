//! HTML serializer
//!
//! Renders an item tree as indented HTML:
//!
//! - text is written as is (no entity escaping)
//! - a node with children opens with `<name attrs>`, then each child goes on its own line
//!   (CRLF) indented by one tab, then `</name>` on a line of its own
//! - a node whose child list is present but empty still gets both tags on separate lines
//! - a node without a child list renders as `<name attrs/>`
//!
//! Indentation is applied by prefixing a tab after every `\n` in a child's rendering, so
//! nested nodes accumulate one tab per level. Multi-line text (fenced code) is indented the
//! same way.

use super::registry::{FormatError, Formatter};
use crate::downmark::ast::{Attribute, Item, Node};

const NEWLINE: &str = "\r\n";
const INDENT: &str = "\t";

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, item: &Item) -> Result<String, FormatError> {
        Ok(serialize_html(item))
    }

    fn description(&self) -> &str {
        "Indented HTML with CRLF line breaks"
    }
}

/// Render an item tree to HTML
pub fn serialize_html(item: &Item) -> String {
    match item {
        Item::Content(content) => content.text().to_string(),
        Item::Node(node) => render_node(node),
    }
}

fn render_node(node: &Node) -> String {
    let attributes = render_attributes(node.attributes());
    let Some(children) = node.children() else {
        return format!("<{}{}/>", node.name(), attributes);
    };

    let mut out = format!("<{}{}>", node.name(), attributes);
    for child in children {
        out.push_str(NEWLINE);
        out.push_str(INDENT);
        out.push_str(&indent(&serialize_html(child)));
    }
    out.push_str(NEWLINE);
    out.push_str(&format!("</{}>", node.name()));
    out
}

/// Each renderable attribute contributes ` name="value"`; the rest contribute nothing
fn render_attributes(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .filter(|a| a.is_renderable())
        .map(|a| format!(" {}=\"{}\"", a.name(), a.value().unwrap_or_default()))
        .collect()
}

fn indent(rendered: &str) -> String {
    rendered.replace('\n', &format!("\n{}", INDENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_verbatim() {
        assert_eq!(serialize_html(&Item::text("a < b & c")), "a < b & c");
    }

    #[test]
    fn test_void_node() {
        assert_eq!(serialize_html(&Item::Node(Node::void("br"))), "<br/>");
    }

    #[test]
    fn test_empty_children_still_open_and_close() {
        assert_eq!(serialize_html(&Item::Node(Node::new("p"))), "<p>\r\n</p>");
    }

    #[test]
    fn test_single_child() {
        let item = Item::Node(Node::with_child("h1", Item::text("Title")));
        assert_eq!(serialize_html(&item), "<h1>\r\n\tTitle\r\n</h1>");
    }

    #[test]
    fn test_nested_indentation_accumulates() {
        let item = Item::Node(Node::with_child(
            "ul",
            Node::with_child("li", Item::text("a")),
        ));
        assert_eq!(
            serialize_html(&item),
            "<ul>\r\n\t<li>\r\n\t\ta\r\n\t</li>\r\n</ul>"
        );
    }

    #[test]
    fn test_multiline_content_is_indented() {
        let item = Item::Node(Node::with_child("code", Item::text("a\r\nb")));
        assert_eq!(serialize_html(&item), "<code>\r\n\ta\r\n\tb\r\n</code>");
    }

    #[test]
    fn test_attributes_keep_order_and_skip_empty() {
        let node = Node::with_child("a", Item::text("x"))
            .attribute("href", Some("/".to_string()))
            .attribute("title", None)
            .attribute("", Some("ignored".to_string()))
            .attribute("rel", Some(String::new()));
        assert_eq!(
            serialize_html(&Item::Node(node)),
            "<a href=\"/\">\r\n\tx\r\n</a>"
        );
    }

    #[test]
    fn test_void_node_with_attributes() {
        let node = Node::void("img")
            .attribute("alt", Some("logo".to_string()))
            .attribute("src", Some("logo.png".to_string()));
        assert_eq!(
            serialize_html(&Item::Node(node)),
            "<img alt=\"logo\" src=\"logo.png\"/>"
        );
    }
}

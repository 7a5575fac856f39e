//! Treeviz formatter for item trees
//!
//! One line per item, two spaces of indentation per level of nesting. Nodes are labelled
//! `<name attr=value …>` and text runs by their quoted text; labels are truncated to 30
//! characters. Self-closing nodes end in `/>`.
//!
//! Example:
//!
//! ```text
//! <html>
//!   <head>
//!   <body>
//!     <h1>
//!       "Title"
//!     <p>
//!       "See "
//!       <a href=/docs>
//!         "the docs"
//! ```

use super::registry::{FormatError, Formatter};
use crate::downmark::ast::{Item, Node};

const MAX_LABEL: usize = 30;

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, item: &Item) -> Result<String, FormatError> {
        Ok(to_treeviz_str(item))
    }

    fn description(&self) -> &str {
        "One line per item, indented by depth"
    }
}

pub fn to_treeviz_str(item: &Item) -> String {
    let mut output = String::new();
    write_item(item, 0, &mut output);
    output
}

fn write_item(item: &Item, depth: usize, output: &mut String) {
    output.push_str(&"  ".repeat(depth));
    output.push_str(&truncate(&label(item), MAX_LABEL));
    output.push('\n');

    if let Item::Node(node) = item {
        for child in node.children().unwrap_or_default() {
            write_item(child, depth + 1, output);
        }
    }
}

fn label(item: &Item) -> String {
    match item {
        Item::Node(node) => node_label(node),
        Item::Content(content) => format!("{:?}", content.text()),
    }
}

fn node_label(node: &Node) -> String {
    let mut label = format!("<{}", node.name());
    for attribute in node.attributes().iter().filter(|a| a.is_renderable()) {
        label.push_str(&format!(
            " {}={}",
            attribute.name(),
            attribute.value().unwrap_or_default()
        ));
    }
    label.push_str(if node.is_self_closing() { "/>" } else { ">" });
    label
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_indentation() {
        let tree = Item::Node(Node::with_children(
            "body",
            vec![
                Item::Node(Node::with_child("h1", Item::text("Title"))),
                Item::Node(Node::void("br")),
            ],
        ));
        assert_eq!(
            to_treeviz_str(&tree),
            "<body>\n  <h1>\n    \"Title\"\n  <br/>\n"
        );
    }

    #[test]
    fn test_attributes_in_label() {
        let link = Node::with_child("a", Item::text("x")).attribute("href", Some("/".into()));
        assert_eq!(to_treeviz_str(&Item::Node(link)), "<a href=/>\n  \"x\"\n");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let text = "a".repeat(40);
        let line = to_treeviz_str(&Item::text(text));
        assert_eq!(line, format!("\"{}...\n", "a".repeat(29)));
    }
}

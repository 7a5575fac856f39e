//! Item and Content - the two shapes a tree entry can take
//!
//! Every entry in the output tree is either an element ([`Node`]) or a run of raw text
//! ([`Content`]). There are no other variants, and all consumers match exhaustively.

use serde::Serialize;

use super::node::Node;

/// A single entry in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Node(Node),
    Content(Content),
}

impl Item {
    /// Shorthand for a text item
    pub fn text(text: impl Into<String>) -> Self {
        Item::Content(Content::new(text))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Item::Node(node) => Some(node),
            Item::Content(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&Content> {
        match self {
            Item::Content(content) => Some(content),
            Item::Node(_) => None,
        }
    }

    /// Short label used by assertion messages and the treeviz format
    pub fn label(&self) -> String {
        match self {
            Item::Node(node) => format!("<{}>", node.name()),
            Item::Content(content) => format!("{:?}", content.text()),
        }
    }
}

impl From<Node> for Item {
    fn from(node: Node) -> Self {
        Item::Node(node)
    }
}

impl From<Content> for Item {
    fn from(content: Content) -> Self {
        Item::Content(content)
    }
}

/// A contiguous run of text that contains no markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    text: String,
}

impl Content {
    pub fn new(text: impl Into<String>) -> Self {
        Content { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append another run to this one. Only used while merging siblings.
    pub(super) fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

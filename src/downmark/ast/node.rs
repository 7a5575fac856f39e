//! Node element
//!
//! A node is an HTML element: a tag name, an ordered attribute list and an optional
//! child list. The child list distinguishes three states that serialize differently:
//!
//! - absent (`None`): a self-closing tag, `<br/>`
//! - present but empty: an explicit open/close pair with no inner lines
//! - present with items: an open/close pair with one indented block per child
//!
//! Children are normalized on construction so that no two adjacent entries are both
//! `Content`. Nodes are never mutated after they are built.

use serde::Serialize;

use super::item::Item;

/// A single `name="value"` pair on a node
///
/// An attribute whose name or value is empty (or whose value is absent) is kept in the
/// list so that ordering is preserved, but renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Attribute {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether this attribute contributes anything to rendered output
    pub fn is_renderable(&self) -> bool {
        !self.name.is_empty() && self.value.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// An HTML element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Item>>,
}

impl Node {
    /// Create a node with a present but empty child list
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            attributes: Vec::new(),
            children: Some(Vec::new()),
        }
    }

    /// Create a self-closing node (children absent)
    pub fn void(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            attributes: Vec::new(),
            children: None,
        }
    }

    /// Create a node from a child sequence, merging adjacent text runs
    pub fn with_children<I>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        Node {
            name: name.into(),
            attributes: Vec::new(),
            children: Some(merge_content(children)),
        }
    }

    /// Create a node that holds exactly one child
    pub fn with_child(name: impl Into<String>, child: impl Into<Item>) -> Self {
        Self::with_children(name, [child.into()])
    }

    /// Append an attribute, keeping insertion order
    pub fn attribute(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up the value of the first attribute with the given name
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name() == name)
            .and_then(Attribute::value)
    }

    /// The child list, or `None` for a self-closing node
    pub fn children(&self) -> Option<&[Item]> {
        self.children.as_deref()
    }

    pub fn is_self_closing(&self) -> bool {
        self.children.is_none()
    }
}

/// Merge adjacent `Content` entries into single runs, concatenating in order.
///
/// Only direct siblings are merged; the children of nested nodes are left as they are
/// (they were already normalized when those nodes were built).
pub fn merge_content<I>(items: I) -> Vec<Item>
where
    I: IntoIterator<Item = Item>,
{
    let mut merged: Vec<Item> = Vec::new();
    for item in items {
        if let Item::Content(next) = &item {
            if let Some(Item::Content(previous)) = merged.last_mut() {
                previous.push_str(next.text());
                continue;
            }
        }
        merged.push(item);
    }
    merged
}

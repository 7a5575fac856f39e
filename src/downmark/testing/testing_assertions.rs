//! Fluent assertion API for item trees

use crate::downmark::ast::{Item, Node};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for an item
pub fn assert_item(item: &Item) -> ItemAssertion<'_> {
    ItemAssertion {
        item,
        context: "root".to_string(),
    }
}

// ============================================================================
// Item Assertions
// ============================================================================

pub struct ItemAssertion<'a> {
    item: &'a Item,
    context: String,
}

impl<'a> ItemAssertion<'a> {
    fn expect_node(&self) -> &'a Node {
        match self.item {
            Item::Node(node) => node,
            Item::Content(content) => panic!(
                "{}: expected a node, found content {:?}",
                self.context,
                content.text()
            ),
        }
    }

    fn expect_children(&self) -> &'a [Item] {
        let node = self.expect_node();
        match node.children() {
            Some(children) => children,
            None => panic!(
                "{}: <{}> is self-closing and has no children",
                self.context,
                node.name()
            ),
        }
    }

    /// Assert this item is a node with the given name
    pub fn node(self, name: &str) -> Self {
        let node = self.expect_node();
        assert_eq!(
            node.name(),
            name,
            "{}: expected <{}>, found <{}>",
            self.context,
            name,
            node.name()
        );
        self
    }

    /// Assert this item is a text run with exactly this text
    pub fn content(self, expected: &str) -> Self {
        match self.item {
            Item::Content(content) => assert_eq!(
                content.text(),
                expected,
                "{}: text mismatch",
                self.context
            ),
            Item::Node(node) => panic!(
                "{}: expected content {:?}, found <{}>",
                self.context,
                expected,
                node.name()
            ),
        }
        self
    }

    /// Assert this node renders as a self-closing tag
    pub fn self_closing(self) -> Self {
        let node = self.expect_node();
        assert!(
            node.is_self_closing(),
            "{}: expected <{}/> to be self-closing",
            self.context,
            node.name()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.expect_children();
        assert_eq!(
            children.len(),
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize_items(children)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        let children = self.expect_children();
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(ItemAssertion {
            item: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Assert the node has exactly one child and run `assertion` on it
    pub fn only_child<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        self.child_count(1).child(0, assertion)
    }

    /// Assert the value of an attribute; `None` means absent or valueless
    pub fn attribute(self, name: &str, expected: Option<&str>) -> Self {
        let node = self.expect_node();
        assert_eq!(
            node.attribute_value(name),
            expected,
            "{}: attribute {:?} on <{}>",
            self.context,
            name,
            node.name()
        );
        self
    }

    /// Assert no node in this subtree has two consecutive text children
    pub fn no_adjacent_content(self) -> Self {
        check_no_adjacent_content(self.item, &self.context);
        self
    }
}

fn check_no_adjacent_content(item: &Item, context: &str) {
    let Some(children) = item.as_node().and_then(Node::children) else {
        return;
    };
    for (index, pair) in children.windows(2).enumerate() {
        assert!(
            !(matches!(pair[0], Item::Content(_)) && matches!(pair[1], Item::Content(_))),
            "{}: children {} and {} are both content: [{}]",
            context,
            index,
            index + 1,
            summarize_items(children)
        );
    }
    for (index, child) in children.iter().enumerate() {
        check_no_adjacent_content(child, &format!("{}.children[{}]", context, index));
    }
}

fn summarize_items(items: &[Item]) -> String {
    items
        .iter()
        .map(Item::label)
        .collect::<Vec<_>>()
        .join(", ")
}

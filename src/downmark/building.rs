//! Building HTML items from the parse tree
//!
//! The builder walks the [`ParseTree`] produced by the block grammar and constructs the
//! final items bottom-up:
//!
//! - headers, fenced code and paragraphs map directly onto nodes
//! - every list entry becomes its own wrapper chain: `li` wrapped in one list layer per
//!   leading space, bounded by [`ParserConfig::max_list_depth`]. Entries at the same
//!   depth are not merged into shared lists.
//! - blockquote lines are re-joined with CRLF and parsed again as a full document; this is
//!   where the grammar recurses, bounded by [`ParserConfig::max_quote_depth`]
//! - passthrough elements are checked for matching closing tags
//!
//! Building never recovers: the first failure aborts the whole document.

use crate::downmark::ast::{Item, Node};
use crate::downmark::config::ParserConfig;
use crate::downmark::error::ParseFailure;
use crate::downmark::parsing::combinators::CRLF;
use crate::downmark::parsing::{
    parse_blocks, Block, HtmlChild, HtmlElement, ListEntry, ListKind, ParseTree,
};

/// Parse `source` as a document and build its items.
///
/// `depth` is the blockquote nesting level `source` was found at (0 for the top level).
pub fn build_terms(
    source: &str,
    config: &ParserConfig,
    depth: usize,
) -> Result<Vec<Item>, ParseFailure> {
    let tree = parse_blocks(source, config)?;
    tracing::debug!(depth, terms = tree.blocks.len(), "building document terms");
    Builder::new(source, config, depth).build(tree)
}

/// Builds items for one document (or one blockquote's content)
pub struct Builder<'a> {
    source: &'a str,
    config: &'a ParserConfig,
    depth: usize,
    offset: usize,
}

impl<'a> Builder<'a> {
    pub fn new(source: &'a str, config: &'a ParserConfig, depth: usize) -> Self {
        Builder {
            source,
            config,
            depth,
            offset: 0,
        }
    }

    pub fn build(mut self, tree: ParseTree) -> Result<Vec<Item>, ParseFailure> {
        self.offset = tree.offset;
        tree.blocks
            .into_iter()
            .map(|block| self.build_block(block))
            .collect()
    }

    fn build_block(&self, block: Block) -> Result<Item, ParseFailure> {
        tracing::trace!(kind = block.kind(), depth = self.depth, "building block");
        let node = match block {
            Block::Header { level, text } => {
                Node::with_child(format!("h{}", level), Item::text(text))
            }
            Block::List { kind, entries } => self.build_list(kind, entries)?,
            Block::Quote { lines, span } => self.build_quote(lines, span.start)?,
            Block::Code { text } => Node::with_child("code", Item::text(text)),
            Block::Html(element) => self.build_element(element)?,
            Block::Paragraph(items) => Node::with_children("p", items),
        };
        Ok(Item::Node(node))
    }

    /// The outer list holds one wrapper chain per entry
    fn build_list(&self, kind: ListKind, entries: Vec<ListEntry>) -> Result<Node, ParseFailure> {
        let max = self.config.max_list_depth;
        if let Some(entry) = entries.iter().find(|entry| entry.depth > max) {
            return Err(ParseFailure::custom(
                self.source,
                self.offset + entry.offset,
                format!("list nesting exceeds {} levels", max),
            ));
        }

        let tag = kind.tag();
        Ok(Node::with_children(
            tag,
            entries
                .into_iter()
                .map(|entry| Item::Node(nest_entry(entry, tag))),
        ))
    }

    fn build_quote(&self, lines: Vec<String>, start: usize) -> Result<Node, ParseFailure> {
        let at = self.offset + start;
        let depth = self.depth + 1;
        if depth > self.config.max_quote_depth {
            return Err(ParseFailure::custom(
                self.source,
                at,
                format!(
                    "blockquote nesting exceeds {} levels",
                    self.config.max_quote_depth
                ),
            ));
        }

        let content = lines.join(CRLF);
        tracing::debug!(depth, lines = lines.len(), "re-parsing blockquote content");
        let items = build_terms(&content, self.config, depth)
            .map_err(|inner| ParseFailure::within_quote(self.source, at, inner))?;
        Ok(Node::with_children("blockquote", items))
    }

    fn build_element(&self, element: HtmlElement) -> Result<Node, ParseFailure> {
        let HtmlElement {
            name,
            children,
            closing,
        } = element;

        if let Some(closing) = &closing {
            if closing.name != name {
                let at = self.offset + closing.span.start;
                let mut failure = ParseFailure::custom(
                    self.source,
                    at,
                    format!("expected </{}>, found </{}>", name, closing.name),
                );
                failure.expected = vec![format!("closing tag for {}", name)];
                return Err(failure);
            }
        }

        match children {
            None => Ok(Node::void(name)),
            Some(children) => {
                let items = children
                    .into_iter()
                    .map(|child| match child {
                        HtmlChild::Element(el) => self.build_element(el).map(Item::Node),
                        HtmlChild::Text(text) => Ok(Item::text(text)),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Node::with_children(name, items))
            }
        }
    }
}

/// `li` wrapped in `depth` single-child layers of `tag`
fn nest_entry(entry: ListEntry, tag: &str) -> Node {
    let mut node = Node::with_child("li", Item::text(entry.text));
    for _ in 0..entry.depth {
        node = Node::with_child(tag, node);
    }
    node
}

//! Intermediate Representation (IR) for parsed documents
//!
//! The block grammar produces a flat list of [`Block`]s, one per term. Each block keeps
//! just enough of the source to build the final HTML items:
//! - blockquotes keep their stripped lines (they are re-parsed as a document later)
//! - passthrough elements keep the name and span of their closing tags (names are
//!   validated later, so a mismatch is a hard failure instead of a silent fallback)
//!
//! Spans are character offsets into the text handed to the grammar.

use std::ops::Range;

use crate::downmark::ast::Item;

/// The result of running the block grammar over one document
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTree {
    pub blocks: Vec<Block>,
    /// Character offset of the parsed text within the untrimmed source. Leading
    /// whitespace is trimmed before parsing, so spans must be shifted by this much.
    pub offset: usize,
}

/// A single term of the document
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Header { level: usize, text: String },
    List { kind: ListKind, entries: Vec<ListEntry> },
    Quote { lines: Vec<String>, span: Range<usize> },
    Code { text: String },
    Html(HtmlElement),
    Paragraph(Vec<Item>),
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Header { .. } => "header",
            Block::List { .. } => "list",
            Block::Quote { .. } => "blockquote",
            Block::Code { .. } => "code",
            Block::Html(_) => "html",
            Block::Paragraph(_) => "paragraph",
        }
    }
}

/// Which bullet style a list term used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1.`, `2.`, ...
    Numbered,
    /// `*`, `+` or `-`
    Bullet,
}

impl ListKind {
    /// The element name used for the list and for every nesting layer
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Numbered => "ol",
            ListKind::Bullet => "ul",
        }
    }
}

/// One line of a list term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Number of leading spaces before the bullet
    pub depth: usize,
    pub text: String,
    /// Where the line starts
    pub offset: usize,
}

/// A literal HTML element found in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    pub name: String,
    /// `None` for `<name/>`
    pub children: Option<Vec<HtmlChild>>,
    /// `None` for `<name/>`
    pub closing: Option<ClosingTag>,
}

impl HtmlElement {
    pub fn self_closing(name: String) -> Self {
        HtmlElement {
            name,
            children: None,
            closing: None,
        }
    }

    pub fn paired(name: String, children: Vec<HtmlChild>, closing: ClosingTag) -> Self {
        HtmlElement {
            name,
            children: Some(children),
            closing: Some(closing),
        }
    }
}

/// The `</name>` that ended a paired element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingTag {
    pub name: String,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlChild {
    Element(HtmlElement),
    Text(String),
}

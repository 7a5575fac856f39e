//! Parsing module for the downmark dialect
//!
//! This module turns source text into a [`ParseTree`](ir::ParseTree):
//! 1. **Blocks**: the document is split into terms on blank lines (two CRLFs) and each
//!    term is classified as header, list, blockquote, fenced code, passthrough HTML or
//!    paragraph, in that order. The first alternative that consumes the whole term wins.
//! 2. **Inlines**: paragraph text is tokenized into formatted spans.
//!
//! Turning the parse tree into HTML items (including re-parsing blockquote content) is the
//! job of the [building module](crate::downmark::building).
//!
//! All grammars are chumsky combinators over `char` input, so every alternative backtracks
//! fully when it fails.

pub mod api;
pub mod blocks;
pub mod combinators;
pub mod html;
pub mod inline;
pub mod ir;

pub use api::parse_blocks;
pub use ir::{Block, ClosingTag, HtmlChild, HtmlElement, ListEntry, ListKind, ParseTree};

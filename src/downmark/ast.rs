//! The HTML tree produced by the parser
//!
//! The tree is built bottom-up while parsing, never mutated afterwards, and consumed by
//! one of the [formatters](crate::downmark::formats).

mod item;
mod node;

pub use item::{Content, Item};
pub use node::{merge_content, Attribute, Node};

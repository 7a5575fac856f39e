//! Testing utilities for tree assertions
//!
//! Tests should check the whole shape of a tree rather than counts or single fields.
//! [`assert_item`] provides a fluent API that walks a tree and reports the path of the
//! item that did not match:
//!
//! ```rust-example
//! use downmark::downmark::testing::assert_item;
//!
//! let body = downmark::parse_body("# Title\r\n\r\n*hi*")?;
//! assert_item(&body.into())
//!     .node("body")
//!     .child_count(2)
//!     .child(0, |h1| {
//!         h1.node("h1").only_child(|text| {
//!             text.content("Title");
//!         });
//!     })
//!     .child(1, |p| {
//!         p.node("p").only_child(|em| {
//!             em.node("em");
//!         });
//!     });
//! ```
//!
//! `no_adjacent_content` checks the merging invariant over a whole subtree.

mod testing_assertions;

pub use testing_assertions::{assert_item, ItemAssertion};

//! # downmark
//!
//! A parser for a constrained, CRLF-delimited Markdown dialect that produces an HTML
//! element tree, plus the serializers that render that tree back to text.
//!
//! ## Testing
//!
//! Tree-shape assertions live in the [testing module](downmark::testing).

pub mod downmark;

pub use downmark::api::{
    markdown_to_html, parse_body, parse_body_with, parse_document, parse_document_with, Converter,
};

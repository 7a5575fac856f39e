//! Output formats for the HTML tree
//!
//! - `html`: the indented HTML serializer (CRLF line breaks, one tab per level)
//! - `json`: the tree as JSON, for tooling
//! - `treeviz`: one line per item, for eyeballing tree shape

pub mod html;
pub mod json;
pub mod registry;
pub mod treeviz;

pub use html::{serialize_html, HtmlFormatter};
pub use json::{serialize_json, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};

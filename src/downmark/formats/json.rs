//! JSON rendering of the item tree
//!
//! Nodes serialize as `{"type": "node", "name": …, "attributes": […], "children": […]}`
//! and text as `{"type": "content", "text": …}`. Empty attribute lists are omitted, as are
//! absent child lists, so a self-closing node can be told apart from an empty one.

use super::registry::{FormatError, Formatter};
use crate::downmark::ast::Item;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, item: &Item) -> Result<String, FormatError> {
        serialize_json(item)
    }

    fn description(&self) -> &str {
        "Item tree as pretty-printed JSON"
    }
}

pub fn serialize_json(item: &Item) -> Result<String, FormatError> {
    serde_json::to_string_pretty(item).map_err(|e| FormatError::SerializationError(e.to_string()))
}

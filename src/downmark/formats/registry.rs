//! Format registry for tree serialization
//!
//! Each format implements the `Formatter` trait and can be registered with
//! `FormatRegistry`, then looked up by name (for example from the command line).

use crate::downmark::ast::Item;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for tree formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "html", "treeviz")
    fn name(&self) -> &str;

    /// Serialize an item (usually the `html` or `body` root) to this format
    fn serialize(&self, item: &Item) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any existing one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize an item using the named format
    pub fn serialize(&self, item: &Item, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(item)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::HtmlFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::TreevizFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downmark::ast::Node;

    struct UpperFormatter;
    impl Formatter for UpperFormatter {
        fn name(&self) -> &str {
            "upper"
        }
        fn serialize(&self, item: &Item) -> Result<String, FormatError> {
            Ok(item.label().to_uppercase())
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
    }

    #[test]
    fn test_defaults_are_registered() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["html", "json", "treeviz"]);
    }

    #[test]
    fn test_register_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(UpperFormatter);
        assert!(registry.has("upper"));

        let item = Item::Node(Node::new("p"));
        assert_eq!(registry.serialize(&item, "upper"), Ok("<P>".to_string()));
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::with_defaults();
        let item = Item::text("x");
        assert_eq!(
            registry.serialize(&item, "yaml"),
            Err(FormatError::FormatNotFound("yaml".to_string()))
        );
    }
}

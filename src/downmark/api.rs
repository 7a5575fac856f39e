//! Entry points
//!
//! - [`parse_body`] returns the parsed terms wrapped in `<body>`
//! - [`parse_document`] wraps that body in `<html>` next to an empty `<head>`
//! - [`Converter`] runs a parse and hands the result to a registered format
//!
//! The `_with` variants take an explicit [`ParserConfig`].

use crate::downmark::ast::{Item, Node};
use crate::downmark::building::build_terms;
use crate::downmark::config::{ConvertConfig, OutputMode, ParserConfig};
use crate::downmark::error::{ConvertError, ParseFailure};
use crate::downmark::formats::{serialize_html, FormatError, FormatRegistry};

/// Parse a document into its top-level terms
pub fn parse_terms(source: &str, config: &ParserConfig) -> Result<Vec<Item>, ParseFailure> {
    build_terms(source, config, 0)
}

pub fn parse_body(source: &str) -> Result<Node, ParseFailure> {
    parse_body_with(source, &ParserConfig::default())
}

pub fn parse_body_with(source: &str, config: &ParserConfig) -> Result<Node, ParseFailure> {
    let terms = parse_terms(source, config)?;
    tracing::debug!(terms = terms.len(), "parsed body");
    Ok(Node::with_children("body", terms))
}

pub fn parse_document(source: &str) -> Result<Node, ParseFailure> {
    parse_document_with(source, &ParserConfig::default())
}

pub fn parse_document_with(source: &str, config: &ParserConfig) -> Result<Node, ParseFailure> {
    let body = parse_body_with(source, config)?;
    Ok(Node::with_children(
        "html",
        vec![Item::Node(Node::new("head")), Item::Node(body)],
    ))
}

/// Parse a whole document and render it as HTML
pub fn markdown_to_html(source: &str) -> Result<String, ParseFailure> {
    let document = parse_document(source)?;
    Ok(serialize_html(&Item::Node(document)))
}

/// Parse + serialize through a format registry
pub struct Converter {
    config: ConvertConfig,
    registry: FormatRegistry,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self::with_registry(config, FormatRegistry::with_defaults())
    }

    pub fn with_registry(config: ConvertConfig, registry: FormatRegistry) -> Self {
        Converter { config, registry }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Parse `source` into the root element selected by the output mode
    pub fn parse(&self, source: &str) -> Result<Node, ParseFailure> {
        match self.config.mode {
            OutputMode::Document => parse_document_with(source, &self.config.parser),
            OutputMode::Body => parse_body_with(source, &self.config.parser),
        }
    }

    pub fn convert(&self, source: &str) -> Result<String, ConvertError> {
        // fail on an unknown format before doing any parsing
        if !self.registry.has(&self.config.format) {
            return Err(ConvertError::Format(
                FormatError::FormatNotFound(self.config.format.clone()),
            ));
        }
        let root = self.parse(source)?;
        let output = self
            .registry
            .serialize(&Item::Node(root), &self.config.format)?;
        Ok(output)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertConfig::default())
    }
}

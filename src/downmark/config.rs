//! Configuration for parsing and conversion
//!
//! - [`ParserConfig`] bounds nesting: blockquote re-entry, passthrough tags, list chains
//! - [`OutputMode`] picks the root element handed to the formatter
//! - [`ConvertConfig`] bundles both with the name of the output format

use std::fmt;
use std::str::FromStr;

/// Default limit for nested blockquotes
pub const DEFAULT_MAX_QUOTE_DEPTH: usize = 64;

/// Default limit for nested passthrough HTML tags
pub const DEFAULT_MAX_HTML_DEPTH: usize = 64;

/// Default limit for list nesting (leading spaces before a bullet)
pub const DEFAULT_MAX_LIST_DEPTH: usize = 64;

/// Limits applied while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// How many blockquotes may be nested inside each other. Each level re-enters the
    /// document grammar, so this bounds recursion depth for hostile input.
    pub max_quote_depth: usize,
    /// How many passthrough tags may be open at once. Checked before the grammar runs.
    pub max_html_depth: usize,
    /// How many wrapper layers a single list entry may get
    pub max_list_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_quote_depth: DEFAULT_MAX_QUOTE_DEPTH,
            max_html_depth: DEFAULT_MAX_HTML_DEPTH,
            max_list_depth: DEFAULT_MAX_LIST_DEPTH,
        }
    }
}

/// Which root element a conversion produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `<html>` with an empty `<head>` and the parsed `<body>`
    #[default]
    Document,
    /// Just the `<body>` element
    Body,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(OutputMode::Document),
            "body" => Ok(OutputMode::Body),
            other => Err(format!("unknown output mode '{}'", other)),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Document => write!(f, "document"),
            OutputMode::Body => write!(f, "body"),
        }
    }
}

/// Everything a [`Converter`](crate::downmark::api::Converter) needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub parser: ParserConfig,
    pub mode: OutputMode,
    /// Name of a format registered in the [`FormatRegistry`](crate::downmark::formats::FormatRegistry)
    pub format: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            parser: ParserConfig::default(),
            mode: OutputMode::default(),
            format: "html".to_string(),
        }
    }
}

impl ConvertConfig {
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_max_quote_depth(mut self, depth: usize) -> Self {
        self.parser.max_quote_depth = depth;
        self
    }

    pub fn with_max_html_depth(mut self, depth: usize) -> Self {
        self.parser.max_html_depth = depth;
        self
    }

    pub fn with_max_list_depth(mut self, depth: usize) -> Self {
        self.parser.max_list_depth = depth;
        self
    }
}

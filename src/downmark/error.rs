//! Error types for parsing and conversion

use chumsky::error::{Simple, SimpleReason};
use std::fmt;

use crate::downmark::formats::FormatError;

/// A location in the source text
///
/// `offset` counts characters (not bytes) from the start of the source. `line` and
/// `column` are 1-indexed; only CRLF ends a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Resolve a character offset into a line/column position
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        let mut previous = None;
        for c in source.chars().take(offset) {
            if c == '\n' && previous == Some('\r') {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
            previous = Some(c);
        }
        // A CR still waiting for its LF belongs to the current line
        Position {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The only way a parse can fail
///
/// Reports where the grammar got stuck and which rules or characters could have matched
/// there. A failure inside a blockquote is reported at the quote, with the failure inside
/// the quoted text carried in `inner` (its position is relative to the quoted text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub position: Position,
    pub expected: Vec<String>,
    pub found: Option<char>,
    pub reason: Option<String>,
    pub inner: Option<Box<ParseFailure>>,
}

impl ParseFailure {
    /// A failure carrying a plain explanation instead of an expected set
    pub fn custom(source: &str, offset: usize, reason: impl Into<String>) -> Self {
        ParseFailure {
            position: Position::locate(source, offset),
            expected: Vec::new(),
            found: source.chars().nth(offset),
            reason: Some(reason.into()),
            inner: None,
        }
    }

    /// Convert a chumsky error. `base` is the character offset of the parsed slice within
    /// `source` (leading whitespace is trimmed before parsing).
    pub(crate) fn from_simple(source: &str, base: usize, error: &Simple<char>) -> Self {
        let offset = base + error.span().start;
        let mut expected: Vec<String> = error
            .expected()
            .map(|e| match e {
                Some(c) => format!("{:?}", c),
                None => "end of input".to_string(),
            })
            .collect();
        if let Some(label) = error.label() {
            expected.insert(0, label.to_string());
        }
        expected.sort();
        expected.dedup();

        let reason = match error.reason() {
            SimpleReason::Custom(msg) => Some(msg.clone()),
            SimpleReason::Unclosed { delimiter, .. } => {
                Some(format!("unclosed delimiter {:?}", delimiter))
            }
            SimpleReason::Unexpected => None,
        };

        ParseFailure {
            position: Position::locate(source, offset),
            expected,
            found: error.found().copied(),
            reason,
            inner: None,
        }
    }

    /// Wrap a failure from re-parsing quoted text, pointing at the quote itself
    pub(crate) fn within_quote(source: &str, quote_offset: usize, inner: ParseFailure) -> Self {
        ParseFailure {
            position: Position::locate(source, quote_offset),
            expected: vec!["blockquote content".to_string()],
            found: source.chars().nth(quote_offset),
            reason: Some("blockquote content failed to parse".to_string()),
            inner: Some(Box::new(inner)),
        }
    }

    /// The deepest failure in the chain
    pub fn root_cause(&self) -> &ParseFailure {
        let mut current = self;
        while let Some(inner) = current.inner.as_deref() {
            current = inner;
        }
        current
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse failure at {}", self.position)?;
        if let Some(reason) = &self.reason {
            write!(f, ": {}", reason)?;
        }
        if !self.expected.is_empty() {
            write!(f, "; expected one of: {}", self.expected.join(", "))?;
        }
        match self.found {
            Some(c) => write!(f, "; found {:?}", c)?,
            None => write!(f, "; found end of input")?,
        }
        if let Some(inner) = &self.inner {
            write!(f, "\n  inside blockquote: {}", inner)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}

/// Errors that can occur while converting a document end to end
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    Parse(ParseFailure),
    Format(FormatError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Parse(e) => write!(f, "{}", e),
            ConvertError::Format(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Parse(e) => Some(e),
            ConvertError::Format(e) => Some(e),
        }
    }
}

impl From<ParseFailure> for ConvertError {
    fn from(e: ParseFailure) -> Self {
        ConvertError::Parse(e)
    }
}

impl From<FormatError> for ConvertError {
    fn from(e: FormatError) -> Self {
        ConvertError::Format(e)
    }
}

/// Format source code context around a failure position
///
/// Shows 2 lines before the failing line, the failing line with a >> marker, 2 lines
/// after, and a caret under the failing column. Lines are split on CRLF only.
pub fn format_source_context(source: &str, position: &Position) -> String {
    let lines: Vec<&str> = source.split("\r\n").collect();
    let error_line = position.line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
        if line_num == error_line {
            let pad = " ".repeat(position.column.saturating_sub(1));
            context.push_str(&format!("       | {}^\n", pad));
        }
    }

    context
}

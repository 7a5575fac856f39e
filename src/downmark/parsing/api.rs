//! Public API for the block grammar

use chumsky::prelude::*;

use super::blocks::document;
use super::html::excess_nesting;
use super::ir::ParseTree;
use crate::downmark::config::ParserConfig;
use crate::downmark::error::ParseFailure;

/// Run the block grammar over a whole document.
///
/// Leading and trailing whitespace around the document is trimmed first; the returned
/// tree records how many characters were trimmed from the front so spans can be mapped
/// back onto `source`. Documents nesting more passthrough tags than
/// `config.max_html_depth` fail before the grammar runs.
pub fn parse_blocks(source: &str, config: &ParserConfig) -> Result<ParseTree, ParseFailure> {
    let offset = source.chars().take_while(|c| c.is_whitespace()).count();
    let trimmed = source.trim();

    if let Some(at) = excess_nesting(trimmed, config.max_html_depth) {
        let mut failure = ParseFailure::custom(
            source,
            offset + at,
            format!("html nesting exceeds {} levels", config.max_html_depth),
        );
        failure.expected = vec!["closing tag".to_string()];
        tracing::debug!(%failure, "passthrough nesting too deep");
        return Err(failure);
    }

    match document().parse(trimmed) {
        Ok(blocks) => {
            tracing::trace!(terms = blocks.len(), offset, "block grammar matched");
            Ok(ParseTree { blocks, offset })
        }
        Err(errors) => {
            let failure = match errors.first() {
                Some(error) => ParseFailure::from_simple(source, offset, error),
                None => ParseFailure::custom(source, offset, "document did not parse"),
            };
            tracing::debug!(%failure, "block grammar failed");
            Err(failure)
        }
    }
}

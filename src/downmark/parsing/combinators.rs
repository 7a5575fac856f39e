//! Shared parser combinators
//!
//! Small building blocks reused by the block, inline and passthrough grammars.

use chumsky::prelude::*;

/// Type alias for parser error
pub type ParserError = Simple<char>;

/// The only recognised line terminator
pub const CRLF: &str = "\r\n";

/// Two consecutive line terminators separate terms
pub const TERM_SEPARATOR: &str = "\r\n\r\n";

/// Lookahead that succeeds, without consuming anything, at a term separator or at the end
/// of input. Block alternatives end with this so they only match whole terms.
pub(crate) fn term_end() -> impl Parser<char, (), Error = ParserError> + Clone {
    just(TERM_SEPARATOR).ignored().or(end()).rewind()
}

/// Require `parser` to consume its entire term
pub(crate) fn anchored<P, O>(parser: P) -> impl Parser<char, O, Error = ParserError> + Clone
where
    P: Parser<char, O, Error = ParserError> + Clone,
{
    parser.then_ignore(term_end())
}

/// One or more characters up to (not including) the next CR
pub(crate) fn rest_of_line() -> impl Parser<char, String, Error = ParserError> + Clone {
    none_of("\r").repeated().at_least(1).collect::<String>()
}

/// Zero or more characters up to (not including) the next CR
pub(crate) fn line_text() -> impl Parser<char, String, Error = ParserError> + Clone {
    none_of("\r").repeated().collect::<String>()
}

/// A single CRLF
pub(crate) fn crlf() -> impl Parser<char, (), Error = ParserError> + Clone {
    just(CRLF).ignored()
}

/// Zero or more whitespace characters, discarded
pub(crate) fn whitespace() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(|c: &char| c.is_whitespace()).repeated().ignored()
}

//! Block grammar
//!
//! A document is a sequence of terms separated by two consecutive CRLFs. Each term is
//! parsed as exactly one of the following, tried in this order:
//!
//! 1. header: ATX (`#` to `######`), then Setext `=` underline, then Setext `-` underline
//! 2. list: numbered (`1.`) or bullet (`*`, `+`, `-`), one item per line
//! 3. blockquote: every line starts with `>`
//! 4. fenced code: ```` ``` ```` CRLF raw text ```` ``` ````
//! 5. passthrough HTML: a single literal element
//! 6. paragraph: inline text (the fallback)
//!
//! Every alternative must consume its whole term; an alternative that stops short
//! backtracks and the next one is tried. Terms are recognised inside the grammar rather
//! than by splitting the string, so fenced code and passthrough HTML may contain blank
//! lines.

use chumsky::prelude::*;

use super::combinators::{
    anchored, crlf, line_text, rest_of_line, ParserError, CRLF, TERM_SEPARATOR,
};
use super::html;
use super::inline::formatted_text;
use super::ir::{Block, ListEntry, ListKind};

/// Opening and closing marker of a fenced code block
pub const FENCE: &str = "```";

/// ATX header: one to six `#`, optional spaces, then the rest of the line
fn atx_header() -> impl Parser<char, Block, Error = ParserError> + Clone {
    just('#')
        .repeated()
        .at_least(1)
        .at_most(6)
        .map(|hashes| hashes.len())
        .then_ignore(just(' ').repeated())
        .then(rest_of_line())
        .map(|(level, text)| Block::Header { level, text })
}

/// Setext header: a line of text underlined by at least two `marker` characters
fn setext_header(marker: char, level: usize) -> impl Parser<char, Block, Error = ParserError> + Clone {
    rest_of_line()
        .then_ignore(crlf())
        .then_ignore(just(marker).repeated().at_least(2))
        .map(move |text| Block::Header { level, text })
}

pub fn header() -> impl Parser<char, Block, Error = ParserError> + Clone {
    choice((
        anchored(atx_header()),
        anchored(setext_header('=', 1)),
        anchored(setext_header('-', 2)),
    ))
    .labelled("header")
}

/// A single list line: leading spaces (the nesting depth), bullet, one space, text
fn list_entry<B>(bullet: B) -> impl Parser<char, ListEntry, Error = ParserError> + Clone
where
    B: Parser<char, (), Error = ParserError> + Clone,
{
    just(' ')
        .repeated()
        .map(|spaces| spaces.len())
        .then_ignore(bullet)
        .then_ignore(just(' '))
        .then(rest_of_line())
        .map_with_span(|(depth, text), span: std::ops::Range<usize>| ListEntry {
            depth,
            text,
            offset: span.start,
        })
}

fn list_of<B>(kind: ListKind, bullet: B) -> impl Parser<char, Block, Error = ParserError> + Clone
where
    B: Parser<char, (), Error = ParserError> + Clone,
{
    list_entry(bullet)
        .separated_by(crlf())
        .at_least(1)
        .map(move |entries| Block::List { kind, entries })
}

/// Digits followed by a dot
fn number_bullet() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(char::is_ascii_digit)
        .repeated()
        .at_least(1)
        .then(just('.'))
        .ignored()
}

fn symbol_bullet() -> impl Parser<char, (), Error = ParserError> + Clone {
    one_of("*+-").ignored()
}

/// A whole term of list lines. Every line must use the same bullet family; a term that
/// mixes numbers and symbols is not a list at all.
pub fn list() -> impl Parser<char, Block, Error = ParserError> + Clone {
    anchored(list_of(ListKind::Numbered, number_bullet()))
        .or(anchored(list_of(ListKind::Bullet, symbol_bullet())))
        .labelled("list")
}

/// `>` with an optional single space, then the rest of the line (possibly empty)
fn quote_line() -> impl Parser<char, String, Error = ParserError> + Clone {
    just('>')
        .ignore_then(just(' ').or_not())
        .ignore_then(line_text())
}

pub fn blockquote() -> impl Parser<char, Block, Error = ParserError> + Clone {
    anchored(
        quote_line()
            .separated_by(crlf())
            .at_least(1)
            .map_with_span(|lines, span| Block::Quote { lines, span }),
    )
    .labelled("blockquote")
}

/// Raw text between fences. The CRLF ending the last content line belongs to the fence.
pub fn code_block() -> impl Parser<char, Block, Error = ParserError> + Clone {
    anchored(
        just(FENCE)
            .ignore_then(crlf())
            .ignore_then(take_until(just(FENCE)))
            .map(|(chars, _)| {
                let mut text: String = chars.into_iter().collect();
                if text.ends_with(CRLF) {
                    text.truncate(text.len() - CRLF.len());
                }
                Block::Code { text }
            }),
    )
    .labelled("code block")
}

pub fn passthrough() -> impl Parser<char, Block, Error = ParserError> + Clone {
    anchored(html::element().map(Block::Html))
}

/// Inline text; matches the empty term, so it only fails when inline parsing stops
/// before the end of the term
pub fn paragraph() -> impl Parser<char, Block, Error = ParserError> + Clone {
    anchored(formatted_text().map(Block::Paragraph)).labelled("paragraph")
}

/// A single term
pub fn term() -> impl Parser<char, Block, Error = ParserError> + Clone {
    choice((
        header(),
        list(),
        blockquote(),
        code_block(),
        passthrough(),
        paragraph(),
    ))
}

/// The whole document: terms separated by blank lines, anchored at end of input
pub fn document() -> impl Parser<char, Vec<Block>, Error = ParserError> + Clone {
    term().separated_by(just(TERM_SEPARATOR)).then_ignore(end())
}

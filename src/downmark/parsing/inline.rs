//! Inline grammar
//!
//! Tokenizes paragraph text into a flat sequence of items. At each position the
//! alternatives below are tried in order and the first one that matches wins:
//!
//! | # | Rule        | Source                  | Result                          |
//! |---|-------------|-------------------------|---------------------------------|
//! | 1 | escape      | `\*`                    | text `*`                        |
//! | 2 | strong      | `**x**`, `__x__`        | `<strong>x</strong>`            |
//! | 3 | emphasis    | `*x*`, `_x_`            | `<em>x</em>`                    |
//! | 4 | code span   | `` `x` ``               | `<code>x</code>`                |
//! | 5 | link        | `[t](d "title")`        | `<a href title>t</a>`           |
//! | 6 | image       | `![alt](src)`           | `<img alt src/>`                |
//! | 7 | plain text  | anything not reserved   | text                            |
//! | 8 | line break  | CRLF not followed by CRLF | `<br/>`                       |
//!
//! Span contents are plain runs that exclude the reserved characters, so spans never nest
//! and never contain other markup.

use chumsky::prelude::*;

use super::combinators::{ParserError, CRLF};
use crate::downmark::ast::{merge_content, Item, Node};

/// Characters that end a plain text run: CR, `_`, `*`, `[`, backtick and backslash
pub const RESERVED: &str = "\r_*[`\\";

/// A non-empty run of characters outside the reserved set
fn plain_run() -> impl Parser<char, String, Error = ParserError> + Clone {
    none_of(RESERVED).repeated().at_least(1).collect::<String>()
}

/// Backslash followed by a reserved character yields that character literally
fn escape() -> impl Parser<char, Item, Error = ParserError> + Clone {
    just('\\')
        .ignore_then(one_of(RESERVED))
        .map(|c: char| Item::text(c.to_string()))
}

/// `delimiter` + plain run + the same `delimiter`, wrapped in a `tag` node
fn delimited_span(
    delimiter: &'static str,
    tag: &'static str,
) -> impl Parser<char, Item, Error = ParserError> + Clone {
    just(delimiter)
        .ignore_then(plain_run())
        .then_ignore(just(delimiter))
        .map(move |text| Item::Node(Node::with_child(tag, Item::text(text))))
}

fn strong() -> impl Parser<char, Item, Error = ParserError> + Clone {
    delimited_span("**", "strong").or(delimited_span("__", "strong"))
}

fn emphasis() -> impl Parser<char, Item, Error = ParserError> + Clone {
    delimited_span("*", "em").or(delimited_span("_", "em"))
}

fn code_span() -> impl Parser<char, Item, Error = ParserError> + Clone {
    delimited_span("`", "code")
}

/// `[text]`, where text may be empty but cannot hold `]` or CR
fn bracketed() -> impl Parser<char, String, Error = ParserError> + Clone {
    just('[')
        .ignore_then(none_of("]\r").repeated().collect::<String>())
        .then_ignore(just(']'))
}

/// A link or image target: no `)`, CR, double quote or whitespace
fn destination() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| !matches!(c, ')' | '\r' | '"') && !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// Optional `"title"` after a run of spaces inside the parentheses
fn title() -> impl Parser<char, String, Error = ParserError> + Clone {
    just(' ')
        .repeated()
        .ignore_then(just('"'))
        .ignore_then(none_of("\"").repeated().collect::<String>())
        .then_ignore(just('"'))
}

fn link() -> impl Parser<char, Item, Error = ParserError> + Clone {
    bracketed()
        .then_ignore(just('('))
        .then(destination())
        .then(title().or_not())
        .then_ignore(just(')'))
        .map(|((text, href), title)| {
            Item::Node(
                Node::with_child("a", Item::text(text))
                    .attribute("href", Some(href))
                    .attribute("title", title),
            )
        })
}

fn image() -> impl Parser<char, Item, Error = ParserError> + Clone {
    just('!')
        .ignore_then(bracketed())
        .then_ignore(just('('))
        .then(destination())
        .then_ignore(just(')'))
        .map(|(alt, src)| {
            Item::Node(
                Node::void("img")
                    .attribute("alt", Some(alt))
                    .attribute("src", Some(src)),
            )
        })
}

fn plain_text() -> impl Parser<char, Item, Error = ParserError> + Clone {
    plain_run().map(Item::text)
}

/// A CRLF inside a paragraph. A CRLF that starts a blank line is left alone: that is the
/// term separator, handled by the block grammar.
fn line_break() -> impl Parser<char, Item, Error = ParserError> + Clone {
    just(CRLF)
        .ignore_then(just(CRLF).or_not().rewind())
        .try_map(|next, span| match next {
            Some(_) => Err(Simple::custom(span, "a blank line ends the paragraph")),
            None => Ok(Item::Node(Node::void("br"))),
        })
}

/// A single inline item
pub fn inline() -> impl Parser<char, Item, Error = ParserError> + Clone {
    choice((
        escape(),
        strong(),
        emphasis(),
        code_span(),
        link(),
        image(),
        plain_text(),
        line_break(),
    ))
}

/// Zero or more inline items, with adjacent text merged
pub fn formatted_text() -> impl Parser<char, Vec<Item>, Error = ParserError> + Clone {
    inline().repeated().map(merge_content)
}

//! Passthrough HTML grammar
//!
//! Recognizes literal HTML written directly in the source so it survives conversion:
//!
//! - self-closing: `<name/>`
//! - paired: `<name> children </name>`, where children are nested elements and text runs
//!
//! Whitespace is allowed before the `>` of any tag. Whitespace right after an opening tag
//! or after a nested element is dropped, so indented markup does not produce text runs.
//! The outermost element does not consume anything after its final `>`.
//!
//! The closing tag name is captured rather than checked here; the builder rejects
//! mismatched names with a positioned failure.
//!
//! The element grammar recurses once per open tag. [`excess_nesting`] scans a document
//! with a flat tokenizer first, so over-deep input is rejected before the grammar runs.
//! The scan counts every opening tag without a closing tag so far, including tags in
//! text that later falls back to a paragraph.

use chumsky::prelude::*;
use std::ops::Range;

use super::combinators::{whitespace, ParserError};
use super::ir::{ClosingTag, HtmlChild, HtmlElement};

/// A letter followed by letters, digits, `-` or `_`
pub fn identifier() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| c.is_alphabetic())
        .chain(filter(|c: &char| c.is_alphanumeric() || *c == '-' || *c == '_').repeated())
        .collect::<String>()
}

/// What a position in the document contributes to tag nesting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagEvent {
    Open,
    Close,
    Other,
}

/// Flat tokenizer over a whole document: tags as the element grammar recognizes them,
/// every other character as `Other`. Never fails.
fn tag_events() -> impl Parser<char, Vec<(TagEvent, usize)>, Error = ParserError> {
    let self_closing = just('<')
        .ignore_then(identifier())
        .then_ignore(just('/'))
        .then_ignore(whitespace())
        .then_ignore(just('>'))
        .to(TagEvent::Other);

    let opening = just('<')
        .ignore_then(identifier())
        .then_ignore(whitespace())
        .then_ignore(just('>'))
        .to(TagEvent::Open);

    let closing = just("</")
        .ignore_then(identifier())
        .then_ignore(whitespace())
        .then_ignore(just('>'))
        .to(TagEvent::Close);

    choice((self_closing, opening, closing, any().to(TagEvent::Other)))
        .map_with_span(|event, span: Range<usize>| (event, span.start))
        .repeated()
        .then_ignore(end())
}

/// Character offset of the first opening tag that would leave more than `limit` tags open
pub fn excess_nesting(text: &str, limit: usize) -> Option<usize> {
    let events = tag_events().parse(text).ok()?;
    let mut depth = 0usize;
    for (event, offset) in events {
        match event {
            TagEvent::Open => {
                depth += 1;
                if depth > limit {
                    return Some(offset);
                }
            }
            TagEvent::Close => depth = depth.saturating_sub(1),
            TagEvent::Other => {}
        }
    }
    None
}

/// One passthrough element, possibly containing nested elements
pub fn element() -> impl Parser<char, HtmlElement, Error = ParserError> + Clone {
    recursive(|element| {
        let self_closing = just('<')
            .ignore_then(identifier())
            .then_ignore(just('/'))
            .then_ignore(whitespace())
            .then_ignore(just('>'))
            .map(HtmlElement::self_closing);

        let opening = just('<')
            .ignore_then(identifier())
            .then_ignore(whitespace())
            .then_ignore(just('>'))
            .then_ignore(whitespace());

        let closing = just("</")
            .ignore_then(identifier())
            .then_ignore(whitespace())
            .then_ignore(just('>'))
            .map_with_span(|name, span| ClosingTag { name, span });

        let text = none_of("<")
            .repeated()
            .at_least(1)
            .collect::<String>()
            .map(HtmlChild::Text);

        let child = element
            .then_ignore(whitespace())
            .map(HtmlChild::Element)
            .or(text);

        let paired = opening
            .then(child.repeated())
            .then(closing)
            .map(|((name, children), closing)| HtmlElement::paired(name, children, closing));

        self_closing.or(paired)
    })
    .labelled("html element")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<HtmlElement, Vec<ParserError>> {
        element().then_ignore(end()).parse(source)
    }

    #[test]
    fn test_identifier() {
        assert_eq!(identifier().parse("h1"), Ok("h1".to_string()));
        assert_eq!(identifier().parse("data-x_y"), Ok("data-x_y".to_string()));
        assert!(identifier().parse("1h").is_err());
    }

    #[test]
    fn test_self_closing() {
        let el = parse("<hr/>").unwrap();
        assert_eq!(el, HtmlElement::self_closing("hr".to_string()));
    }

    #[test]
    fn test_nested_elements() {
        let el = parse("<div><span/></div>").unwrap();
        assert_eq!(el.name, "div");
        assert_eq!(
            el.children,
            Some(vec![HtmlChild::Element(HtmlElement::self_closing(
                "span".to_string()
            ))])
        );
        let closing = el.closing.unwrap();
        assert_eq!(closing.name, "div");
        assert_eq!(closing.span, 12..18);
    }

    #[test]
    fn test_text_children_keep_inner_whitespace() {
        let el = parse("<p>a <b>c</b> d</p>").unwrap();
        let children = el.children.unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], HtmlChild::Text("a ".to_string()));
        assert_eq!(children[2], HtmlChild::Text("d".to_string()));
    }

    #[test]
    fn test_indentation_is_dropped() {
        let el = parse("<ul>\r\n  <li>x</li>\r\n  <li>y</li>\r\n</ul>").unwrap();
        let children = el.children.unwrap();
        assert_eq!(children.len(), 2);
        assert!(children
            .iter()
            .all(|c| matches!(c, HtmlChild::Element(e) if e.name == "li")));
    }

    #[test]
    fn test_mismatched_closing_is_captured() {
        let el = parse("<div></span>").unwrap();
        assert_eq!(el.closing.unwrap().name, "span");
    }

    #[test]
    fn test_unterminated_element_fails() {
        assert!(parse("<div>text").is_err());
        assert!(parse("<div>a < b</div>").is_err());
    }

    #[test]
    fn test_excess_nesting_counts_open_tags() {
        assert_eq!(excess_nesting("<a><b><c/></b></a>", 2), None);
        assert_eq!(excess_nesting("<a><b><c></c></b></a>", 2), Some(6));
        // closed siblings do not add up
        assert_eq!(excess_nesting("<a></a><b></b><c></c>", 1), None);
    }

    #[test]
    fn test_excess_nesting_ignores_non_tags() {
        assert_eq!(excess_nesting("1 < 2 and a<-b < > </ >", 0), None);
        assert_eq!(excess_nesting("", 0), None);
        assert_eq!(excess_nesting("x <p>", 0), Some(2));
    }

    #[test]
    fn test_deep_input_is_flagged_without_recursing() {
        let depth = 10_000;
        let source = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
        assert_eq!(excess_nesting(&source, 64), Some(64 * 5));
    }

    #[test]
    fn test_outer_element_leaves_trailing_whitespace() {
        assert!(parse("<br/> ").is_err());
        assert!(element().then_ignore(just(' ')).then_ignore(end()).parse("<br/> ").is_ok());
    }
}

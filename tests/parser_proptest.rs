//! Property-based tests for the document parser

use downmark::downmark::ast::Item;
use downmark::downmark::formats::serialize_html;
use downmark::downmark::testing::assert_item;
use downmark::parse_body;
use proptest::prelude::*;

/// Terms of every block kind, plus some that may or may not parse
fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ,.]{0,30}",
        "#{1,7} [a-z]{1,10}",
        "[a-z]{1,10}\r\n(==|---)",
        "(- |\\* |  \\+ )[a-z ]{1,10}(\r\n -  [a-z]{1,5}){0,3}",
        "[0-9]{1,2}\\. [a-z]{1,10}",
        "> [a-z*_ ]{0,10}(\r\n>> [a-z]{1,5}){0,2}",
        "```\r\n[a-z<>&\r\n]{0,20}\r\n```",
        "<(div|p)>[a-z ]{0,8}(<br/>)?</(div|p)>",
        "[a-z]{0,5}(\\*\\*|__|\\*|_|`)[a-z]{1,5}(\\*\\*|__|\\*|_|`)[a-z]{0,5}",
        "[a-z]{1,5}\r\n[a-z]{1,5}",
        "\\[[a-z]{1,5}\\]\\([a-z/.]{1,8}( \"[a-z]{1,5}\")?\\)",
        "!\\[[a-z]{0,5}\\]\\([a-z/.]{1,8}\\)",
        "[a-z\\\\*_`\\[\\]()!<>/ ]{0,20}",
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(term_strategy(), 1..6).prop_map(|terms| terms.join("\r\n\r\n"))
}

proptest! {
    #[test]
    fn parsing_is_deterministic(source in document_strategy()) {
        prop_assert_eq!(parse_body(&source), parse_body(&source));
    }

    #[test]
    fn content_siblings_are_always_merged(source in document_strategy()) {
        if let Ok(body) = parse_body(&source) {
            assert_item(&Item::Node(body)).no_adjacent_content();
        }
    }

    #[test]
    fn plain_words_become_one_text_run(text in "[a-z][a-z ]{0,30}[a-z]") {
        let body = parse_body(&text).unwrap();
        assert_item(&Item::Node(body)).only_child(|p| {
            p.node("p").only_child(|t| {
                t.content(&text);
            });
        });
    }

    #[test]
    fn rendered_body_is_wrapped(source in document_strategy()) {
        if let Ok(body) = parse_body(&source) {
            let html = serialize_html(&Item::Node(body));
            prop_assert!(html.starts_with("<body>"));
            prop_assert!(html.ends_with("\r\n</body>"));
        }
    }
}

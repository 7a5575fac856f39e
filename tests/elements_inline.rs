//! Inline formatting inside paragraphs

use downmark::downmark::ast::Item;
use downmark::downmark::testing::assert_item;
use downmark::parse_body;
use rstest::rstest;

fn paragraph(source: &str) -> Item {
    let body = parse_body(source).expect("document should parse");
    let children = body.children().expect("body has children");
    assert_eq!(children.len(), 1, "expected a single term");
    children[0].clone()
}

#[rstest]
#[case::emphasis_star("*hi*", "em")]
#[case::emphasis_underscore("_hi_", "em")]
#[case::strong_star("**hi**", "strong")]
#[case::strong_underscore("__hi__", "strong")]
#[case::code("`hi`", "code")]
fn test_span(#[case] source: &str, #[case] tag: &str) {
    let p = paragraph(source);
    assert_item(&p).node("p").only_child(|span| {
        span.node(tag).only_child(|t| {
            t.content("hi");
        });
    });
}

#[rstest]
#[case::escaped_star("\\*", "*")]
#[case::escaped_underscore("\\_x\\_", "_x_")]
#[case::escaped_backslash("a\\\\b", "a\\b")]
#[case::escaped_bracket("\\[not a link]", "[not a link]")]
#[case::bare_lf("one\ntwo", "one\ntwo")]
#[case::html_like_text("1 < 2 & 3 > 2", "1 < 2 & 3 > 2")]
fn test_plain_text(#[case] source: &str, #[case] expected: &str) {
    let p = paragraph(source);
    assert_item(&p).node("p").only_child(|t| {
        t.content(expected);
    });
}

#[test]
fn test_text_around_spans() {
    let p = paragraph("a **b** c");
    assert_item(&p)
        .node("p")
        .child_count(3)
        .child(0, |t| {
            t.content("a ");
        })
        .child(1, |s| {
            s.node("strong");
        })
        .child(2, |t| {
            t.content(" c");
        })
        .no_adjacent_content();
}

#[test]
fn test_escapes_merge_into_one_run() {
    let p = paragraph("price\\*2 \\_each\\_");
    assert_item(&p).node("p").only_child(|t| {
        t.content("price*2 _each_");
    });
}

#[test]
fn test_link() {
    let p = paragraph("[home](http://example.com)");
    assert_item(&p).node("p").only_child(|a| {
        a.node("a")
            .attribute("href", Some("http://example.com"))
            .attribute("title", None)
            .only_child(|t| {
                t.content("home");
            });
    });
}

#[test]
fn test_link_with_title() {
    let p = paragraph("[home](/ \"Go home\")");
    assert_item(&p).node("p").only_child(|a| {
        a.node("a")
            .attribute("href", Some("/"))
            .attribute("title", Some("Go home"));
    });
}

#[test]
fn test_image_at_start_of_term() {
    let p = paragraph("![logo](img/logo.png)");
    assert_item(&p).node("p").only_child(|img| {
        img.node("img")
            .self_closing()
            .attribute("alt", Some("logo"))
            .attribute("src", Some("img/logo.png"));
    });
}

#[test]
fn test_bang_inside_text_stays_text() {
    // `!` is ordinary text, so it is swallowed by the preceding run and the bracket
    // starts a link
    let p = paragraph("see ![logo](logo.png)");
    assert_item(&p)
        .node("p")
        .child_count(2)
        .child(0, |t| {
            t.content("see !");
        })
        .child(1, |a| {
            a.node("a").attribute("href", Some("logo.png"));
        });
}

#[test]
fn test_line_breaks() {
    let p = paragraph("first\r\nsecond\r\nthird");
    assert_item(&p)
        .node("p")
        .child_count(5)
        .child(1, |br| {
            br.node("br").self_closing();
        })
        .child(3, |br| {
            br.node("br").self_closing();
        });
}

#[test]
fn test_emphasis_example() {
    let p = paragraph("*hi*");
    assert_item(&p).node("p").only_child(|em| {
        em.node("em").only_child(|t| {
            t.content("hi");
        });
    });
}

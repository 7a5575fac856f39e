//! Rendering parsed documents

use downmark::downmark::ast::Item;
use downmark::downmark::config::{ConvertConfig, OutputMode};
use downmark::downmark::formats::{serialize_html, to_treeviz_str};
use downmark::{markdown_to_html, parse_body, parse_document, Converter};

fn lines(lines: &[&str]) -> String {
    lines.join("\r\n")
}

fn body_html(source: &str) -> String {
    serialize_html(&Item::Node(parse_body(source).unwrap()))
}

#[test]
fn test_header_document() {
    assert_eq!(
        markdown_to_html("# Title\r\n\r\n").unwrap(),
        lines(&[
            "<html>",
            "\t<head>",
            "\t</head>",
            "\t<body>",
            "\t\t<h1>",
            "\t\t\tTitle",
            "\t\t</h1>",
            "\t</body>",
            "</html>",
        ])
    );
}

#[test]
fn test_wrapper_chains() {
    assert_eq!(
        body_html("- a\r\n  - b"),
        lines(&[
            "<body>",
            "\t<ul>",
            "\t\t<li>",
            "\t\t\ta",
            "\t\t</li>",
            "\t\t<ul>",
            "\t\t\t<ul>",
            "\t\t\t\t<li>",
            "\t\t\t\t\tb",
            "\t\t\t\t</li>",
            "\t\t\t</ul>",
            "\t\t</ul>",
            "\t</ul>",
            "</body>",
        ])
    );
}

#[test]
fn test_link_attributes() {
    assert_eq!(
        body_html("[home](/ \"Home\") and [away](/x)"),
        lines(&[
            "<body>",
            "\t<p>",
            "\t\t<a href=\"/\" title=\"Home\">",
            "\t\t\thome",
            "\t\t</a>",
            "\t\t and ",
            "\t\t<a href=\"/x\">",
            "\t\t\taway",
            "\t\t</a>",
            "\t</p>",
            "</body>",
        ])
    );
}

#[test]
fn test_self_closing_and_empty_nodes() {
    assert_eq!(
        body_html("a\r\nb\r\n\r\n\r\n\r\n<hr/>"),
        lines(&[
            "<body>",
            "\t<p>",
            "\t\ta",
            "\t\t<br/>",
            "\t\tb",
            "\t</p>",
            "\t<p>",
            "\t</p>",
            "\t<hr/>",
            "</body>",
        ])
    );
}

#[test]
fn test_code_lines_are_indented_but_not_escaped() {
    assert_eq!(
        body_html("```\r\n<b>\r\n  x & y\r\n```"),
        lines(&[
            "<body>",
            "\t<code>",
            "\t\t<b>",
            "\t\t  x & y",
            "\t</code>",
            "</body>",
        ])
    );
}

#[test]
fn test_treeviz() {
    let document = parse_document("# Title\r\n\r\nSee [the docs](/docs)").unwrap();
    insta::assert_snapshot!(to_treeviz_str(&Item::Node(document)), @r###"
    <html>
      <head>
      <body>
        <h1>
          "Title"
        <p>
          "See "
          <a href=/docs>
            "the docs"
    "###);
}

#[test]
fn test_json_format() {
    let converter = Converter::new(
        ConvertConfig::default()
            .with_mode(OutputMode::Body)
            .with_format("json"),
    );
    let output = converter.convert("<br/>").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "type": "node",
            "name": "body",
            "children": [{"type": "node", "name": "br"}]
        })
    );
}

#[test]
fn test_converter_matches_direct_serialization() {
    let source = "Title\r\n=====\r\n\r\n> *quoted*";
    let direct = markdown_to_html(source).unwrap();
    assert_eq!(Converter::default().convert(source).unwrap(), direct);
}

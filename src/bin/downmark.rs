//! Command-line interface for downmark
//! Converts a CRLF-delimited markdown file into HTML (or one of the other registered formats).
//!
//! Usage:
//!   downmark `<input>` [-o `<output>`] [-f `<format>`] [--body] [--max-quote-depth `<n>`]
//!            [--max-html-depth `<n>`] [--max-list-depth `<n>`]
//!   downmark --list-formats

use clap::{value_parser, Arg, ArgAction, Command};
use downmark::downmark::config::{ConvertConfig, OutputMode};
use downmark::downmark::error::{format_source_context, ConvertError};
use downmark::downmark::formats::FormatRegistry;
use downmark::Converter;

fn main() {
    let matches = Command::new("downmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert CRLF-delimited markdown into an indented HTML document")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the markdown file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'html', 'json', 'treeviz')")
                .default_value("html"),
        )
        .arg(
            Arg::new("body")
                .long("body")
                .help("Emit only the <body> element")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-quote-depth")
                .long("max-quote-depth")
                .help("Maximum blockquote nesting (default 64)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max-html-depth")
                .long("max-html-depth")
                .help("Maximum passthrough HTML nesting (default 64)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max-list-depth")
                .long("max-list-depth")
                .help("Maximum list indentation depth (default 64)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let Some(input) = matches.get_one::<String>("input") else {
        eprintln!("Error: no input file given");
        std::process::exit(1);
    };
    let mode = if matches.get_flag("body") {
        OutputMode::Body
    } else {
        OutputMode::Document
    };
    let mut config = ConvertConfig::default().with_mode(mode);
    if let Some(format) = matches.get_one::<String>("format") {
        config = config.with_format(format);
    }
    if let Some(depth) = matches.get_one::<usize>("max-quote-depth") {
        config = config.with_max_quote_depth(*depth);
    }
    if let Some(depth) = matches.get_one::<usize>("max-html-depth") {
        config = config.with_max_html_depth(*depth);
    }
    if let Some(depth) = matches.get_one::<usize>("max-list-depth") {
        config = config.with_max_list_depth(*depth);
    }

    handle_convert_command(input, matches.get_one::<String>("output"), config);
}

/// Handle a conversion
fn handle_convert_command(path: &str, output: Option<&String>, config: ConvertConfig) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let converter = Converter::new(config);
    let rendered = match converter.convert(&source) {
        Ok(rendered) => rendered,
        Err(ConvertError::Parse(failure)) => {
            eprintln!("{}: {}", path, failure);
            eprint!("{}", format_source_context(&source, &failure.position));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match output {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, rendered) {
                eprintln!("Error writing {}: {}", out_path, e);
                std::process::exit(1);
            }
        }
        None => print!("{}", rendered),
    }
}

/// Handle --list-formats
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
}

//! End-to-end test for printing a document stream
//!
//! Exercises the complete flow: preferences from TOML -> encoder -> printer.

use docstream_encoder::{Encoder, Printer, YamlEncoder, YamlPreferences};
use docstream_tree::{DOCUMENT_SEPARATOR_MARKER as MARKER, DocNode, Style};
use pretty_assertions::assert_eq;
use regex::Regex;

fn int(value: &str) -> DocNode {
    DocNode::tagged_scalar("!!int", value)
}

/// Three documents as a reader would hand them over: directives, comments,
/// anchors and a bare scalar.
fn stream() -> Vec<DocNode> {
    let first = DocNode::mapping([
        (
            DocNode::scalar("name").with_head_comment("# service definition"),
            DocNode::scalar("api"),
        ),
        (
            DocNode::scalar("ports"),
            DocNode::sequence([int("8080"), int("8443")]).with_style(Style::Flow),
        ),
        (
            DocNode::scalar("defaults"),
            DocNode::mapping([(DocNode::scalar("retries"), int("3"))]).with_anchor("defaults"),
        ),
        (DocNode::scalar("backup"), DocNode::alias("defaults")),
    ])
    .with_leading_content(format!("%YAML 1.2\n{MARKER}\n"))
    .with_foot_comment("# end of first");

    let second = DocNode::mapping([
        (
            DocNode::scalar("enabled"),
            DocNode::tagged_scalar("!!bool", "true"),
        ),
        (DocNode::scalar("note"), DocNode::scalar("multi\nline\n")),
    ])
    .with_leading_content(format!("{MARKER}\nsecond document\n"));

    vec![first, second, DocNode::scalar("plain text")]
}

const EXPECTED: &str = "\
%YAML 1.2
---
# service definition
name: api
ports: [8080, 8443]
defaults: &defaults
  retries: 3
backup: *defaults
# end of first
---
# second document
enabled: true
note: |
  multi
  line
---
plain text
";

fn print(prefs: YamlPreferences) -> String {
    let printer = Printer::new(YamlEncoder::new(prefs));
    let mut out = Vec::new();
    printer.print_documents(&mut out, &stream()).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_stream_from_toml_preferences() {
    let prefs = YamlPreferences::from_toml_str("indent = 2\n").unwrap();
    assert_eq!(print(prefs), EXPECTED);
}

#[test]
fn test_stream_with_wide_indent() {
    let prefs = YamlPreferences::from_toml_str("indent = 4\n").unwrap();
    let output = print(prefs);
    assert!(output.contains("defaults: &defaults\n    retries: 3\n"));
    assert!(output.contains("note: |\n    multi\n    line\n"));
}

#[test]
fn test_stream_without_separators() {
    let prefs = YamlPreferences::from_toml_str("print_doc_separators = false\n").unwrap();
    assert_eq!(print(prefs), EXPECTED.replace("---\n", ""));
}

#[test]
fn test_colorized_stream_matches_plain_text() {
    let prefs = YamlPreferences::from_toml_str("colorize = true\n").unwrap();
    let output = print(prefs);
    assert!(output.contains("\x1b["));

    let ansi = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    assert_eq!(ansi.replace_all(&output, ""), EXPECTED);
}

#[test]
fn test_wrapped_scalar_document() {
    let prefs = YamlPreferences::from_toml_str("unwrap_scalar = false\n").unwrap();
    let encoder = YamlEncoder::new(prefs);
    let mut out = Vec::new();
    encoder
        .encode(&mut out, &DocNode::scalar("123").with_style(Style::SingleQuoted))
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "'123'\n");
}

#[test]
fn test_logging_can_be_initialized() {
    // a subscriber may already be installed by another test
    let _ = docstream_encoder::logging::init();
    assert_eq!(print(YamlPreferences::default()), EXPECTED);
}

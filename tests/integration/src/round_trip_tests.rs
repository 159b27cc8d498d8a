//! Encoded streams must parse back to the values that were encoded

use docstream_encoder::{Printer, YamlEncoder, YamlPreferences};
use docstream_tree::{DocNode, Style};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_yaml::Value;

fn parse_stream(text: &str) -> Vec<Value> {
    serde_yaml::Deserializer::from_str(text)
        .map(|document| Value::deserialize(document).unwrap())
        .collect()
}

fn print(prefs: YamlPreferences, documents: &[DocNode]) -> String {
    let printer = Printer::new(YamlEncoder::new(prefs));
    let mut out = Vec::new();
    printer.print_documents(&mut out, documents).unwrap();
    String::from_utf8(out).unwrap()
}

fn tricky_strings() -> DocNode {
    let values = [
        "12",
        "true",
        "null",
        "",
        " padded ",
        "a: b",
        "# not a comment",
        "- dash",
        "quote's",
        "tab\there",
        "line one\nline two",
        "trailing\n\n",
        "&anchor",
        "*star",
        "[1, 2]",
    ];
    DocNode::sequence(values.into_iter().map(DocNode::scalar))
}

#[test]
fn test_strings_survive_round_trip() {
    let output = print(YamlPreferences::default(), &[tricky_strings()]);
    let parsed = parse_stream(&output);
    let expected: Vec<Value> = match &parsed[..] {
        [Value::Sequence(items)] => items.clone(),
        other => panic!("unexpected parse: {other:?}"),
    };
    let strings: Vec<Value> = tricky_strings()
        .content
        .iter()
        .map(|node| Value::String(node.value.clone()))
        .collect();
    assert_eq!(expected, strings);
}

#[test]
fn test_multi_document_stream_round_trip() {
    let documents = [
        DocNode::mapping([
            (DocNode::scalar("count"), DocNode::tagged_scalar("!!int", "3")),
            (
                DocNode::scalar("ratio"),
                DocNode::tagged_scalar("!!float", "0.5"),
            ),
        ])
        .with_foot_comment("# first"),
        DocNode::sequence([
            DocNode::mapping([(DocNode::scalar("id"), DocNode::tagged_scalar("!!int", "1"))]),
            DocNode::mapping([]).with_style(Style::Flow),
            DocNode::sequence([]),
        ])
        .with_leading_content("between documents\n"),
    ];

    for indent in [2, 3, 4] {
        let output = print(YamlPreferences::default().with_indent(indent), &documents);
        let parsed = parse_stream(&output);
        let expected = parse_stream("count: 3\nratio: 0.5\n---\n- id: 1\n- {}\n- []\n");
        assert_eq!(parsed, expected, "indent {indent}:\n{output}");
    }
}

#[test]
fn test_aliases_resolve_after_round_trip() {
    let document = DocNode::mapping([
        (
            DocNode::scalar("base"),
            DocNode::mapping([(DocNode::scalar("level"), DocNode::scalar("info"))])
                .with_anchor("base"),
        ),
        (DocNode::scalar("copy"), DocNode::alias("base")),
    ]);
    let output = print(YamlPreferences::default(), &[document]);
    let parsed = parse_stream(&output);
    let expected = parse_stream("base:\n  level: info\ncopy:\n  level: info\n");
    assert_eq!(parsed, expected);
}

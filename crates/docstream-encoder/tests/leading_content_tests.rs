//! Leading content rendering: comment prefixes, directives, separators

use docstream_encoder::{Encoder, YamlEncoder, YamlPreferences};
use docstream_tree::DOCUMENT_SEPARATOR_MARKER as MARKER;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn render(prefs: YamlPreferences, content: &str) -> String {
    let encoder = YamlEncoder::new(prefs);
    let mut out = Vec::new();
    encoder.print_leading_content(&mut out, content).unwrap();
    String::from_utf8(out).unwrap()
}

#[rstest]
#[case::empty("", "")]
#[case::comment("# c\n", "# c\n")]
#[case::indented_comment("   # c\n", "   # c\n")]
#[case::tab_comment("\t#c\n", "\t#c\n")]
#[case::plain_text("hello\n", "# hello\n")]
#[case::directive("%YAML 1.2\n", "%YAML 1.2\n")]
#[case::blank_line("\n", "\n")]
#[case::unterminated("hello", "# hello\n")]
#[case::unterminated_comment("# tail", "# tail\n")]
#[case::mixed("# already a comment\nplain text\n", "# already a comment\n# plain text\n")]
#[case::blank_between("a\n\nb", "# a\n\n# b\n")]
#[case::whitespace_only("   \n", "#    \n")]
fn test_leading_content_lines(#[case] content: &str, #[case] expected: &str) {
    assert_eq!(render(YamlPreferences::default(), content), expected);
}

#[rstest]
#[case::own_line(format!("{MARKER}\n"), "---\n", "")]
#[case::between_comments(format!("# a\n{MARKER}\n# b\n"), "# a\n---\n# b\n", "# a\n# b\n")]
#[case::unterminated(format!("# a\n{MARKER}"), "# a\n---\n\n", "# a\n\n")]
#[case::unterminated_alone(MARKER.to_string(), "---\n\n", "\n")]
#[case::embedded(format!("x {MARKER} y\n"), "---\n", "")]
#[case::twice(format!("{MARKER}\n{MARKER}\n"), "---\n---\n", "")]
#[case::with_directive(format!("%YAML 1.2\n{MARKER}\n"), "%YAML 1.2\n---\n", "%YAML 1.2\n")]
fn test_separator_markers(
    #[case] content: String,
    #[case] with_separators: &str,
    #[case] without_separators: &str,
) {
    assert_eq!(render(YamlPreferences::default(), &content), with_separators);
    assert_eq!(
        render(YamlPreferences::default().with_doc_separators(false), &content),
        without_separators
    );
}

#[test]
fn test_leading_content_is_never_colorized() {
    let prefs = YamlPreferences::default().with_colorize(true);
    assert_eq!(render(prefs, "note\n"), "# note\n");
}

#[rstest]
#[case(true, "---\n")]
#[case(false, "")]
fn test_print_document_separator(#[case] enabled: bool, #[case] expected: &str) {
    let encoder = YamlEncoder::new(YamlPreferences::default().with_doc_separators(enabled));
    let mut out = Vec::new();
    encoder.print_document_separator(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

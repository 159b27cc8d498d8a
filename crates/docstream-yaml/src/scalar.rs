//! Scalar presentation: plain-safety, quoting and block scalars

use serde_yaml::Value;

use crate::node::{NodeStyle, YamlNode};

const CORE_PREFIX: &str = "tag:yaml.org,2002:";

const INDICATORS: [char; 15] = [
    '&', '*', '!', '|', '>', '%', '@', '`', '#', '\'', '"', '{', '[', '?', ':',
];

/// Where a scalar is being written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    /// Top-level node of a document
    Root,
    /// After `key:` or `-`
    Value,
    /// Implicit mapping key
    Key,
    /// Inside a flow collection
    Flow,
}

impl Context {
    fn allows_block(self) -> bool {
        matches!(self, Self::Root | Self::Value)
    }
}

/// How a scalar body is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Repr {
    Inline(String),
    /// Block scalar header (`|-`, `>` ...) plus unindented body lines;
    /// an empty line is a blank line.
    Block { header: String, lines: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rendered {
    pub tag: Option<String>,
    pub repr: Repr,
}

/// Shorthand form of a tag (`!!str` instead of `tag:yaml.org,2002:str`)
pub(crate) fn short_tag(tag: &str) -> String {
    if let Some(rest) = tag.strip_prefix(CORE_PREFIX) {
        format!("!!{rest}")
    } else if tag.starts_with('!') || tag.is_empty() {
        tag.to_string()
    } else {
        format!("!<{tag}>")
    }
}

fn is_core_scalar_tag(tag: &str) -> bool {
    matches!(tag, "!!str" | "!!int" | "!!float" | "!!bool" | "!!null")
}

/// Tag a plain scalar resolves to under the core schema
pub(crate) fn resolve_plain(value: &str) -> &'static str {
    match serde_yaml::from_str::<Value>(value) {
        Ok(Value::Null) => "!!null",
        Ok(Value::Bool(_)) => "!!bool",
        Ok(Value::Number(n)) if n.is_f64() => "!!float",
        Ok(Value::Number(_)) => "!!int",
        _ => "!!str",
    }
}

/// Characters a YAML reader rejects or treats as a line break
fn is_unprintable(c: char) -> bool {
    (c.is_control() && c != '\t' && c != '\n')
        || matches!(c, '\u{feff}' | '\u{fffe}' | '\u{ffff}' | '\u{2028}' | '\u{2029}')
}

fn has_forbidden_control(value: &str) -> bool {
    value.chars().any(is_unprintable)
}

/// Can `value` be written without quotes and read back as the same text
fn plain_ok(value: &str, ctx: Context) -> bool {
    if value.is_empty() || value.trim() != value || value.contains('\n') {
        return false;
    }
    if has_forbidden_control(value) {
        return false;
    }
    if ctx == Context::Flow && value.contains([',', '[', ']', '{', '}']) {
        return false;
    }
    match serde_yaml::from_str::<Value>(value) {
        Ok(Value::String(parsed)) => parsed == value,
        Ok(Value::Null) => matches!(value, "~" | "null" | "Null" | "NULL"),
        Ok(Value::Bool(_) | Value::Number(_)) => !value.starts_with(INDICATORS),
        _ => false,
    }
}

fn literal_ok(value: &str) -> bool {
    !value.trim_end_matches('\n').is_empty() && !has_forbidden_control(value)
}

/// Whether a block scalar body needs an explicit indentation indicator:
/// its first non-empty line starts with whitespace the reader would take as
/// indentation.
pub(crate) fn needs_indent_indicator(lines: &[String]) -> bool {
    lines
        .iter()
        .find(|line| !line.is_empty())
        .is_some_and(|line| line.starts_with([' ', '\t']))
}

fn folded_ok(value: &str) -> bool {
    literal_ok(value)
        && value
            .trim_end_matches('\n')
            .split('\n')
            .all(|line| !line.starts_with([' ', '\t']))
}

pub(crate) fn double_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if is_unprintable(c) => {
                let code = c as u32;
                if code <= 0xff {
                    out.push_str(&format!("\\x{code:02X}"));
                } else {
                    out.push_str(&format!("\\u{code:04X}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn chomping(value: &str) -> (&str, &'static str, usize) {
    let body = value.trim_end_matches('\n');
    let trailing = value.len() - body.len();
    let indicator = match trailing {
        0 => "-",
        1 => "",
        _ => "+",
    };
    (body, indicator, trailing)
}

fn literal(value: &str) -> Repr {
    let (body, chomp, trailing) = chomping(value);
    let mut lines: Vec<String> = body.split('\n').map(str::to_string).collect();
    lines.extend(std::iter::repeat_n(String::new(), trailing.saturating_sub(1)));
    Repr::Block {
        header: format!("|{chomp}"),
        lines,
    }
}

/// Every line break of the original becomes a blank line so nothing folds
fn folded(value: &str) -> Repr {
    let (body, chomp, trailing) = chomping(value);
    let mut lines = Vec::new();
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    lines.extend(std::iter::repeat_n(String::new(), trailing.saturating_sub(1)));
    Repr::Block {
        header: format!(">{chomp}"),
        lines,
    }
}

/// Decide the tag and textual form of a scalar node
pub(crate) fn render(node: &YamlNode, ctx: Context) -> Rendered {
    let value = node.value.as_str();
    let tag = short_tag(&node.tag);
    let mut explicit =
        node.style == NodeStyle::Tagged || (!tag.is_empty() && !is_core_scalar_tag(&tag));
    let typed = is_core_scalar_tag(&tag) && tag != "!!str";

    let repr = match node.style {
        NodeStyle::SingleQuoted if !value.contains('\n') && !has_forbidden_control(value) => {
            explicit |= typed;
            Repr::Inline(single_quote(value))
        }
        NodeStyle::DoubleQuoted => {
            explicit |= typed;
            Repr::Inline(double_quote(value))
        }
        NodeStyle::Literal if ctx.allows_block() && literal_ok(value) => literal(value),
        NodeStyle::Folded if ctx.allows_block() && folded_ok(value) => folded(value),
        NodeStyle::Folded if ctx.allows_block() && literal_ok(value) => literal(value),
        _ if value.contains('\n') => {
            if ctx.allows_block() && literal_ok(value) {
                literal(value)
            } else {
                Repr::Inline(double_quote(value))
            }
        }
        _ if value.is_empty() => {
            if tag.is_empty() || tag == "!!null" {
                match ctx {
                    Context::Value => Repr::Inline(String::new()),
                    _ => Repr::Inline("null".to_string()),
                }
            } else {
                Repr::Inline("\"\"".to_string())
            }
        }
        _ if plain_ok(value, ctx) => {
            let resolved = resolve_plain(value);
            if tag == "!!str" && resolved != "!!str" {
                Repr::Inline(double_quote(value))
            } else {
                explicit |= typed && resolved != tag;
                Repr::Inline(value.to_string())
            }
        }
        _ => {
            explicit |= typed;
            Repr::Inline(double_quote(value))
        }
    };

    Rendered {
        tag: explicit.then_some(tag),
        repr,
    }
}

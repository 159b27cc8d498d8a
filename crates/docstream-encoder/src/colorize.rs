//! Terminal colorization of rendered YAML
//!
//! The encoder hands the complete rendered text to a [`Colorizer`] once per
//! document. [`AnsiColorizer`] highlights YAML line by line using the
//! `colored` palette.

use colored::{Color, Colorize};

/// Post-processor turning rendered YAML into terminal output
pub trait Colorizer: Send + Sync {
    fn colorize(&self, rendered: &[u8]) -> Vec<u8>;
}

const COMMENT: Color = Color::BrightBlack;
const MARKER: Color = Color::Magenta;
const KEY: Color = Color::Cyan;
const PROPERTY: Color = Color::Yellow;
const STRING: Color = Color::Green;
const LITERAL: Color = Color::Magenta;

fn paint(text: &str, color: Color) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.color(color).to_string()
}

fn paint_bold(text: &str, color: Color) -> String {
    text.color(color).bold().to_string()
}

/// ANSI highlighter for block-style YAML.
///
/// Forces `colored` on for the process, since the rendered text is always
/// buffered before it reaches the terminal. Non-UTF-8 input is returned
/// unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiColorizer;

impl AnsiColorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Colorizer for AnsiColorizer {
    fn colorize(&self, rendered: &[u8]) -> Vec<u8> {
        let Ok(text) = std::str::from_utf8(rendered) else {
            return rendered.to_vec();
        };
        // colorizing was requested explicitly; the sink is a buffer, not a tty
        colored::control::set_override(true);

        let mut out = String::with_capacity(text.len() * 2);
        // indent of the line that opened a block scalar
        let mut block_parent: Option<usize> = None;

        for line in text.split_inclusive('\n') {
            let (body, newline) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            let indent = body.len() - body.trim_start().len();

            if let Some(parent) = block_parent {
                if body.trim().is_empty() || indent > parent {
                    out.push_str(&body[..indent]);
                    out.push_str(&paint(&body[indent..], STRING));
                    out.push_str(newline);
                    continue;
                }
                block_parent = None;
            }

            let (painted, opens_block) = colorize_line(body);
            if opens_block {
                block_parent = Some(indent);
            }
            out.push_str(&painted);
            out.push_str(newline);
        }
        out.into_bytes()
    }
}

/// Colorize one line; also reports whether it opens a block scalar
fn colorize_line(line: &str) -> (String, bool) {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if trimmed.is_empty() {
        return (line.to_string(), false);
    }
    if trimmed.starts_with('#') {
        return (format!("{indent}{}", paint(trimmed, COMMENT)), false);
    }
    if indent.is_empty()
        && (trimmed == "---"
            || trimmed.starts_with("--- ")
            || trimmed == "..."
            || trimmed.starts_with('%'))
    {
        return (paint_bold(trimmed, MARKER), false);
    }

    let mut out = indent.to_string();
    let mut rest = trimmed;

    // sequence dashes, possibly several on one line
    while rest.starts_with('-') && (rest.len() == 1 || rest[1..].starts_with(' ')) {
        let after = rest[1..].trim_start();
        out.push_str(&rest[..rest.len() - after.len()]);
        rest = after;
    }

    if let Some(colon) = find_key_end(rest) {
        let key = &rest[..colon];
        let key_trimmed = key.trim_end();
        out.push_str(&colorize_properties_then(key_trimmed, KEY));
        out.push_str(&key[key_trimmed.len()..]);
        out.push(':');
        rest = &rest[colon + 1..];
    }

    let (value, comment) = split_comment(rest);
    let (painted, opens_block) = colorize_value(value);
    out.push_str(&painted);
    if let Some(comment) = comment {
        out.push_str(&paint(comment, COMMENT));
    }
    (out, opens_block)
}

/// Byte index of the `:` ending an implicit key, if the line has one
fn find_key_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' && q == b'"' {
                    i += 1;
                } else if b == q {
                    if q == b'\'' && bytes.get(i + 1) == Some(&b'\'') {
                        i += 1;
                    } else {
                        quote = None;
                    }
                }
            }
            None => match b {
                b'"' | b'\'' if i == 0 || matches!(bytes[i - 1], b' ' | b'[' | b'{' | b',') => {
                    quote = Some(b);
                }
                b'[' | b'{' => depth += 1,
                b']' | b'}' => depth = depth.saturating_sub(1),
                b'#' if i > 0 && bytes[i - 1] == b' ' => return None,
                b':' if depth == 0 && matches!(bytes.get(i + 1), None | Some(b' ')) => {
                    return Some(i);
                }
                _ => {}
            },
        }
        i += 1;
    }
    None
}

/// Split a trailing ` # comment` off a value, respecting quotes
fn split_comment(text: &str) -> (&str, Option<&str>) {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if (b == b'"' || b == b'\'') && (i == 0 || bytes[i - 1] == b' ') => {
                quote = Some(b)
            }
            None if b == b'#' && (i == 0 || bytes[i - 1] == b' ') => {
                let value_end = text[..i].trim_end().len();
                return (&text[..value_end], Some(&text[value_end..]));
            }
            None => {}
        }
    }
    (text, None)
}

/// Anchors and tags in front of `text`, then `text` in `color`
fn colorize_properties_then(text: &str, color: Color) -> String {
    let mut out = String::new();
    let mut rest = text;
    while rest.starts_with(['&', '!']) {
        let end = rest.find(' ').unwrap_or(rest.len());
        out.push_str(&paint(&rest[..end], PROPERTY));
        let after = rest[end..].trim_start();
        out.push_str(&rest[end..rest.len() - after.len()]);
        rest = after;
    }
    if rest.starts_with('*') {
        out.push_str(&paint(rest, PROPERTY));
    } else {
        out.push_str(&paint(rest, color));
    }
    out
}

fn is_literal_word(text: &str) -> bool {
    matches!(
        text,
        "true" | "false" | "True" | "False" | "TRUE" | "FALSE" | "null" | "Null" | "NULL" | "~"
    ) || (text.parse::<f64>().is_ok() && text.bytes().any(|b| b.is_ascii_digit()))
        || matches!(text, ".inf" | "-.inf" | ".nan" | ".Inf" | ".NaN")
        || (text.starts_with("0x") && i64::from_str_radix(&text[2..], 16).is_ok())
        || (text.starts_with("0o") && i64::from_str_radix(&text[2..], 8).is_ok())
}

/// Colorize the value part of a line (after any key), keeping its leading space
fn colorize_value(value: &str) -> (String, bool) {
    let word = value.trim_start();
    let lead = &value[..value.len() - word.len()];
    if word.is_empty() {
        return (value.to_string(), false);
    }

    // split off anchors and tags
    let mut props_end = 0;
    let mut rest = word;
    while rest.starts_with(['&', '!']) {
        let end = rest.find(' ').unwrap_or(rest.len());
        let after = rest[end..].trim_start();
        props_end += rest.len() - after.len();
        rest = after;
    }
    let props = &word[..props_end];
    let mut out = lead.to_string();
    if !props.is_empty() {
        let props_trimmed = props.trim_end();
        out.push_str(&paint(props_trimmed, PROPERTY));
        out.push_str(&props[props_trimmed.len()..]);
    }

    let opens_block = rest.starts_with(['|', '>']);
    let painted = if rest.is_empty() {
        String::new()
    } else if opens_block {
        paint(rest, MARKER)
    } else if rest.starts_with('*') {
        paint(rest, PROPERTY)
    } else if rest.starts_with(['"', '\'']) {
        paint(rest, STRING)
    } else if rest.starts_with(['[', '{']) {
        rest.to_string()
    } else if is_literal_word(rest) {
        paint(rest, LITERAL)
    } else {
        paint(rest, STRING)
    };
    out.push_str(&painted);
    (out, opens_block)
}

//! Block-style YAML emitter

use std::io::Write;

use crate::error::{EmitError, Result};
use crate::node::{NodeKind, NodeStyle, YamlNode};
use crate::scalar::{self, Context, Repr};

/// Indent used when the requested width is outside `2..=9`
pub const DEFAULT_INDENT: usize = 2;

/// Renders a [`YamlNode`] as YAML text.
///
/// Encoders only talk to the YAML layer through this trait, so the renderer
/// can be swapped without touching comment or separator handling.
pub trait Marshaller: Send + Sync {
    /// Write `node` to `out`, nesting blocks `indent` columns deeper per level
    fn marshal(&self, node: &YamlNode, indent: usize, out: &mut dyn Write) -> Result<()>;
}

/// Default [`Marshaller`] producing block-style YAML.
///
/// Indent widths outside `2..=9` fall back to [`DEFAULT_INDENT`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockEmitter;

impl BlockEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Marshaller for BlockEmitter {
    fn marshal(&self, node: &YamlNode, indent: usize, out: &mut dyn Write) -> Result<()> {
        let text = to_string(node, indent)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Render `node` to a string with [`BlockEmitter`] rules
pub fn to_string(node: &YamlNode, indent: usize) -> Result<String> {
    let mut emitter = Emitter::new(indent);
    emitter.emit_root(node)?;
    Ok(emitter.buf)
}

fn effective_width(indent: usize) -> usize {
    if (2..=9).contains(&indent) {
        indent
    } else {
        DEFAULT_INDENT
    }
}

fn join_words(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (true, _) => second.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{first} {second}"),
    }
}

/// Anchor and non-implicit tag of a collection
fn collection_props(node: &YamlNode) -> String {
    let anchor = if node.anchor.is_empty() {
        String::new()
    } else {
        format!("&{}", node.anchor)
    };
    let tag = scalar::short_tag(&node.tag);
    let implicit = match node.kind {
        NodeKind::Mapping => "!!map",
        NodeKind::Sequence => "!!seq",
        _ => "",
    };
    if tag.is_empty() || (tag == implicit && node.style != NodeStyle::Tagged) {
        anchor
    } else {
        join_words(&anchor, &tag)
    }
}

fn scalar_props(node: &YamlNode, tag: Option<&str>) -> String {
    let anchor = if node.anchor.is_empty() {
        String::new()
    } else {
        format!("&{}", node.anchor)
    };
    join_words(&anchor, tag.unwrap_or_default())
}

fn alias_text(node: &YamlNode) -> Result<String> {
    if node.value.is_empty() {
        return Err(EmitError::invalid("alias node without an anchor name"));
    }
    Ok(format!("*{}", node.value))
}

struct Emitter {
    width: usize,
    buf: String,
}

impl Emitter {
    fn new(indent: usize) -> Self {
        Self {
            width: effective_width(indent),
            buf: String::new(),
        }
    }

    fn pad(&mut self, columns: usize) {
        self.buf.extend(std::iter::repeat_n(' ', columns));
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }

    fn at_line_start(&self) -> bool {
        self.buf.is_empty() || self.buf.ends_with('\n')
    }

    /// Head and foot comments, one `#` line each
    fn comment_lines(&mut self, text: &str, indent: usize) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                self.newline();
                continue;
            }
            self.pad(indent);
            if !line.starts_with('#') {
                self.buf.push_str("# ");
            }
            self.buf.push_str(line);
            self.newline();
        }
    }

    fn line_comment(&mut self, text: &str) {
        let joined = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            return;
        }
        if !self.at_line_start() {
            self.buf.push(' ');
        }
        if !joined.starts_with('#') {
            self.buf.push_str("# ");
        }
        self.buf.push_str(&joined);
    }

    fn emit_root(&mut self, node: &YamlNode) -> Result<()> {
        if node.kind != NodeKind::Document {
            return self.emit_top(node);
        }
        let [child] = node.content.as_slice() else {
            return Err(EmitError::invalid(format!(
                "document must wrap exactly one node, found {}",
                node.content.len()
            )));
        };
        self.comment_lines(&node.head_comment, 0);
        self.emit_top(child)?;
        self.comment_lines(&node.foot_comment, 0);
        Ok(())
    }

    fn emit_top(&mut self, node: &YamlNode) -> Result<()> {
        self.comment_lines(&node.head_comment, 0);
        match node.kind {
            NodeKind::Document => return Err(EmitError::invalid("nested document node")),
            NodeKind::Mapping | NodeKind::Sequence if !node.is_inline() => {
                let props = collection_props(node);
                self.buf.push_str(&props);
                self.line_comment(&node.line_comment);
                if !self.at_line_start() {
                    self.newline();
                }
                self.block_collection(node, 0, false)?;
            }
            _ => {
                let (props, repr) = self.inline_parts(node, Context::Root)?;
                self.finish_inline(false, &props, repr, &node.line_comment, self.width);
            }
        }
        self.comment_lines(&node.foot_comment, 0);
        Ok(())
    }

    /// Properties and text of a node that fits on its key or dash line
    fn inline_parts(&self, node: &YamlNode, ctx: Context) -> Result<(String, Repr)> {
        match node.kind {
            NodeKind::Scalar => {
                let rendered = scalar::render(node, ctx);
                Ok((scalar_props(node, rendered.tag.as_deref()), rendered.repr))
            }
            NodeKind::Alias => Ok((String::new(), Repr::Inline(alias_text(node)?))),
            NodeKind::Mapping | NodeKind::Sequence => {
                Ok((collection_props(node), Repr::Inline(self.flow(node)?)))
            }
            NodeKind::Document => Err(EmitError::invalid("nested document node")),
        }
    }

    /// Finish a line holding an inline value; block scalar bodies follow at `body_indent`
    fn finish_inline(
        &mut self,
        separated: bool,
        props: &str,
        repr: Repr,
        line_comment: &str,
        body_indent: usize,
    ) {
        let (text, body) = match repr {
            Repr::Inline(text) => (text, None),
            Repr::Block { header, lines } if scalar::needs_indent_indicator(&lines) => {
                // `|` or `>` first, then the indicator, then any chomping
                let (style, chomp) = header.split_at(1);
                (format!("{style}{}{chomp}", self.width), Some(lines))
            }
            Repr::Block { header, lines } => (header, Some(lines)),
        };
        let word = join_words(props, &text);
        if !word.is_empty() {
            if separated {
                self.buf.push(' ');
            }
            self.buf.push_str(&word);
        }
        self.line_comment(line_comment);
        self.newline();
        for line in body.unwrap_or_default() {
            if !line.is_empty() {
                self.pad(body_indent);
                self.buf.push_str(&line);
            }
            self.newline();
        }
    }

    fn block_collection(&mut self, node: &YamlNode, indent: usize, first_inline: bool) -> Result<()> {
        match node.kind {
            NodeKind::Mapping => self.block_mapping(node, indent, first_inline),
            NodeKind::Sequence => self.block_sequence(node, indent, first_inline),
            kind => Err(EmitError::invalid(format!("{kind} is not a collection"))),
        }
    }

    /// Whether a collection can begin on the line of its parent's dash
    fn can_start_inline(node: &YamlNode) -> bool {
        if !collection_props(node).is_empty() || !node.line_comment.is_empty() {
            return false;
        }
        match node.kind {
            NodeKind::Mapping => match node.content.as_slice() {
                [key, value, ..] => {
                    key.head_comment.is_empty()
                        && (!value.is_inline() || value.head_comment.is_empty())
                }
                _ => false,
            },
            NodeKind::Sequence => node
                .content
                .first()
                .is_some_and(|item| item.head_comment.is_empty()),
            _ => false,
        }
    }

    fn block_mapping(&mut self, node: &YamlNode, indent: usize, first_inline: bool) -> Result<()> {
        if node.content.len() % 2 != 0 {
            return Err(EmitError::invalid(format!(
                "mapping holds {} nodes, expected key/value pairs",
                node.content.len()
            )));
        }
        for (i, pair) in node.content.chunks(2).enumerate() {
            let (key, value) = (&pair[0], &pair[1]);
            if !(first_inline && i == 0) {
                self.comment_lines(&key.head_comment, indent);
                if value.is_inline() {
                    self.comment_lines(&value.head_comment, indent);
                }
                self.pad(indent);
            }
            let key_text = self.key_text(key)?;
            self.buf.push_str(&key_text);
            self.buf.push(':');

            let line_comment = if value.line_comment.is_empty() {
                &key.line_comment
            } else {
                &value.line_comment
            };
            self.mapping_value(value, indent, line_comment)?;
            self.comment_lines(&value.foot_comment, indent);
            self.comment_lines(&key.foot_comment, indent);
        }
        Ok(())
    }

    fn key_text(&self, key: &YamlNode) -> Result<String> {
        match key.kind {
            NodeKind::Scalar => {
                let rendered = scalar::render(key, Context::Key);
                let text = match rendered.repr {
                    Repr::Inline(text) => text,
                    Repr::Block { .. } => scalar::double_quote(&key.value),
                };
                Ok(join_words(&scalar_props(key, rendered.tag.as_deref()), &text))
            }
            // `*a:` would read as an alias named `a:`
            NodeKind::Alias => Ok(format!("{} ", alias_text(key)?)),
            NodeKind::Mapping | NodeKind::Sequence => {
                Ok(join_words(&collection_props(key), &self.flow(key)?))
            }
            kind => Err(EmitError::UnsupportedKey { kind }),
        }
    }

    fn mapping_value(&mut self, value: &YamlNode, indent: usize, line_comment: &str) -> Result<()> {
        let child_indent = indent + self.width;
        if value.is_inline() {
            let (props, repr) = self.inline_parts(value, Context::Value)?;
            self.finish_inline(true, &props, repr, line_comment, child_indent);
            return Ok(());
        }
        if value.kind == NodeKind::Document {
            return Err(EmitError::invalid("document node used as a mapping value"));
        }
        let props = collection_props(value);
        if !props.is_empty() {
            self.buf.push(' ');
            self.buf.push_str(&props);
        }
        self.line_comment(line_comment);
        self.newline();
        self.comment_lines(&value.head_comment, child_indent);
        self.block_collection(value, child_indent, false)
    }

    fn block_sequence(&mut self, node: &YamlNode, indent: usize, first_inline: bool) -> Result<()> {
        let child_indent = indent + self.width;
        for (i, item) in node.content.iter().enumerate() {
            if !(first_inline && i == 0) {
                self.comment_lines(&item.head_comment, indent);
                self.pad(indent);
            }
            self.buf.push('-');
            if item.is_inline() {
                let (props, repr) = self.inline_parts(item, Context::Value)?;
                self.finish_inline(true, &props, repr, &item.line_comment, child_indent);
            } else if item.kind == NodeKind::Document {
                return Err(EmitError::invalid("document node used as a sequence item"));
            } else if Self::can_start_inline(item) {
                self.pad(self.width - 1);
                self.block_collection(item, child_indent, true)?;
            } else {
                let props = collection_props(item);
                if !props.is_empty() {
                    self.buf.push(' ');
                    self.buf.push_str(&props);
                }
                self.line_comment(&item.line_comment);
                self.newline();
                self.block_collection(item, child_indent, false)?;
            }
            self.comment_lines(&item.foot_comment, indent);
        }
        Ok(())
    }

    fn flow(&self, node: &YamlNode) -> Result<String> {
        match node.kind {
            NodeKind::Mapping => {
                if node.content.len() % 2 != 0 {
                    return Err(EmitError::invalid(format!(
                        "mapping holds {} nodes, expected key/value pairs",
                        node.content.len()
                    )));
                }
                let entries = node
                    .content
                    .chunks(2)
                    .map(|pair| {
                        let key = self.flow_item(&pair[0], true)?;
                        let value = self.flow_item(&pair[1], false)?;
                        Ok(format!("{key}: {value}"))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{{{}}}", entries.join(", ")))
            }
            NodeKind::Sequence => {
                let items = node
                    .content
                    .iter()
                    .map(|item| self.flow_item(item, false))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("[{}]", items.join(", ")))
            }
            _ => self.flow_item(node, false),
        }
    }

    fn flow_item(&self, node: &YamlNode, is_key: bool) -> Result<String> {
        match node.kind {
            NodeKind::Scalar => {
                let rendered = scalar::render(node, Context::Flow);
                let text = match rendered.repr {
                    Repr::Inline(text) => text,
                    Repr::Block { .. } => scalar::double_quote(&node.value),
                };
                Ok(join_words(&scalar_props(node, rendered.tag.as_deref()), &text))
            }
            NodeKind::Alias if is_key => Ok(format!("{} ", alias_text(node)?)),
            NodeKind::Alias => alias_text(node),
            NodeKind::Mapping | NodeKind::Sequence => {
                Ok(join_words(&collection_props(node), &self.flow(node)?))
            }
            NodeKind::Document if is_key => Err(EmitError::UnsupportedKey {
                kind: NodeKind::Document,
            }),
            NodeKind::Document => Err(EmitError::invalid("nested document node")),
        }
    }
}

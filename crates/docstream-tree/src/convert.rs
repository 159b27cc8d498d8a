//! Structural conversion into the YAML layer's node representation

use docstream_yaml::{NodeKind, NodeStyle, YamlNode};

use crate::error::{ConvertError, Result};
use crate::node::{DocNode, Kind, Style};

impl From<Kind> for NodeKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Document => NodeKind::Document,
            Kind::Sequence => NodeKind::Sequence,
            Kind::Mapping => NodeKind::Mapping,
            Kind::Scalar => NodeKind::Scalar,
            Kind::Alias => NodeKind::Alias,
        }
    }
}

impl From<Style> for NodeStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Default => NodeStyle::Default,
            Style::Tagged => NodeStyle::Tagged,
            Style::DoubleQuoted => NodeStyle::DoubleQuoted,
            Style::SingleQuoted => NodeStyle::SingleQuoted,
            Style::Literal => NodeStyle::Literal,
            Style::Folded => NodeStyle::Folded,
            Style::Flow => NodeStyle::Flow,
        }
    }
}

/// Anchor names may not contain whitespace or flow indicators
fn valid_anchor(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ',' | '[' | ']' | '{' | '}'))
}

impl DocNode {
    /// Convert this tree into a fresh [`YamlNode`] tree.
    ///
    /// Kind, style, tag, value, anchor and comments are copied; leading
    /// content is not, since it is rendered by the caller before the node.
    /// `self` is left untouched.
    pub fn to_yaml_node(&self) -> Result<YamlNode> {
        self.convert(None)
    }

    fn convert(&self, parent: Option<Kind>) -> Result<YamlNode> {
        match self.kind {
            Kind::Document => {
                if let Some(parent) = parent {
                    return Err(ConvertError::NestedDocument { parent });
                }
                if self.content.len() != 1 {
                    return Err(ConvertError::DocumentChildCount {
                        count: self.content.len(),
                    });
                }
            }
            Kind::Mapping if self.content.len() % 2 != 0 => {
                return Err(ConvertError::OddMappingEntries {
                    count: self.content.len(),
                });
            }
            Kind::Alias if self.value.is_empty() => return Err(ConvertError::EmptyAlias),
            Kind::Alias if !valid_anchor(&self.value) => {
                return Err(ConvertError::InvalidAnchor {
                    name: self.value.clone(),
                    kind: self.kind,
                });
            }
            _ => {}
        }
        if !self.anchor.is_empty() && !valid_anchor(&self.anchor) {
            return Err(ConvertError::InvalidAnchor {
                name: self.anchor.clone(),
                kind: self.kind,
            });
        }

        let content = self
            .content
            .iter()
            .map(|child| child.convert(Some(self.kind)))
            .collect::<Result<Vec<_>>>()?;

        Ok(YamlNode {
            kind: self.kind.into(),
            style: self.style.into(),
            tag: self.tag.clone(),
            value: self.value.clone(),
            anchor: self.anchor.clone(),
            head_comment: self.head_comment.clone(),
            line_comment: self.line_comment.clone(),
            foot_comment: self.foot_comment.clone(),
            content,
        })
    }
}

//! Library-native YAML node

use std::fmt;

/// Structural kind of a [`YamlNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    Document,
    Sequence,
    Mapping,
    #[default]
    Scalar,
    Alias,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Document => "document",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Scalar => "scalar",
            Self::Alias => "alias",
        };
        f.write_str(name)
    }
}

/// Presentation style requested for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeStyle {
    /// Let the emitter pick the representation
    #[default]
    Default,
    /// Always print the tag, even when it would resolve implicitly
    Tagged,
    DoubleQuoted,
    SingleQuoted,
    /// `|` block scalar
    Literal,
    /// `>` block scalar
    Folded,
    /// `[a, b]` / `{a: b}` collections
    Flow,
}

/// A YAML node as understood by the [`Marshaller`](crate::Marshaller).
///
/// Mapping content alternates key and value nodes. Alias nodes carry the
/// referenced anchor name in `value`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YamlNode {
    pub kind: NodeKind,
    pub style: NodeStyle,
    pub tag: String,
    pub value: String,
    pub anchor: String,
    pub head_comment: String,
    pub line_comment: String,
    pub foot_comment: String,
    pub content: Vec<YamlNode>,
}

impl YamlNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Plain scalar with an explicit tag
    pub fn scalar(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Scalar,
            tag: tag.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Is this a mapping or sequence without children
    pub fn is_empty_collection(&self) -> bool {
        matches!(self.kind, NodeKind::Mapping | NodeKind::Sequence) && self.content.is_empty()
    }

    /// Whether the node renders on a single line after its key or dash
    pub(crate) fn is_inline(&self) -> bool {
        match self.kind {
            NodeKind::Scalar | NodeKind::Alias => true,
            NodeKind::Mapping | NodeKind::Sequence => {
                self.style == NodeStyle::Flow || self.content.is_empty()
            }
            NodeKind::Document => false,
        }
    }
}

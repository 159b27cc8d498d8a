//! Document node model

use std::fmt;

/// Structural kind of a [`DocNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Document,
    Sequence,
    Mapping,
    #[default]
    Scalar,
    Alias,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Document => "Document",
            Self::Sequence => "Sequence",
            Self::Mapping => "Mapping",
            Self::Scalar => "Scalar",
            Self::Alias => "Alias",
        };
        f.write_str(name)
    }
}

/// Presentation style recorded by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Default,
    Tagged,
    DoubleQuoted,
    SingleQuoted,
    Literal,
    Folded,
    Flow,
}

/// One node of a document tree.
///
/// Mapping `content` alternates key and value nodes. For [`Kind::Alias`]
/// nodes `value` holds the referenced anchor name. `leading_content` and
/// `foot_comment` are verbatim text and may carry the
/// [`DOCUMENT_SEPARATOR_MARKER`](crate::DOCUMENT_SEPARATOR_MARKER).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocNode {
    pub kind: Kind,
    pub style: Style,
    pub tag: String,
    pub value: String,
    pub anchor: String,
    pub content: Vec<DocNode>,
    pub head_comment: String,
    pub line_comment: String,
    pub foot_comment: String,
    pub leading_content: String,
}

impl DocNode {
    fn with_kind(kind: Kind, tag: &str) -> Self {
        Self {
            kind,
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// String scalar
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::tagged_scalar("!!str", value)
    }

    /// Scalar with an explicit tag such as `!!int` or `!custom`
    pub fn tagged_scalar(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: Kind::Scalar,
            tag: tag.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Mapping built from key/value pairs
    pub fn mapping(entries: impl IntoIterator<Item = (DocNode, DocNode)>) -> Self {
        let mut node = Self::with_kind(Kind::Mapping, "!!map");
        for (key, value) in entries {
            node.content.push(key);
            node.content.push(value);
        }
        node
    }

    pub fn sequence(items: impl IntoIterator<Item = DocNode>) -> Self {
        let mut node = Self::with_kind(Kind::Sequence, "!!seq");
        node.content.extend(items);
        node
    }

    /// Reference to the node anchored as `anchor`
    pub fn alias(anchor: impl Into<String>) -> Self {
        Self {
            kind: Kind::Alias,
            value: anchor.into(),
            ..Self::default()
        }
    }

    /// Document wrapper around a single root node
    pub fn document(root: DocNode) -> Self {
        let mut node = Self::with_kind(Kind::Document, "");
        node.content.push(root);
        node
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    pub fn with_head_comment(mut self, comment: impl Into<String>) -> Self {
        self.head_comment = comment.into();
        self
    }

    pub fn with_line_comment(mut self, comment: impl Into<String>) -> Self {
        self.line_comment = comment.into();
        self
    }

    pub fn with_foot_comment(mut self, comment: impl Into<String>) -> Self {
        self.foot_comment = comment.into();
        self
    }

    pub fn with_leading_content(mut self, content: impl Into<String>) -> Self {
        self.leading_content = content.into();
        self
    }

    /// Key/value pairs of a mapping node; empty for other kinds
    pub fn entries(&self) -> impl Iterator<Item = (&DocNode, &DocNode)> {
        let content: &[DocNode] = if self.kind == Kind::Mapping {
            &self.content
        } else {
            &[]
        };
        content.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// Single-line summary for logs
impl fmt::Display for DocNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.tag.is_empty() {
            write!(f, " {}", self.tag)?;
        }
        if !self.anchor.is_empty() {
            write!(f, " &{}", self.anchor)?;
        }
        match self.kind {
            Kind::Scalar => write!(f, " {:?}", self.value),
            Kind::Alias => write!(f, " *{}", self.value),
            Kind::Mapping => write!(f, " ({} entries)", self.content.len() / 2),
            Kind::Sequence => write!(f, " ({} items)", self.content.len()),
            Kind::Document => Ok(()),
        }
    }
}

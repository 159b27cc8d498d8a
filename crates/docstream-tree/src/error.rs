//! Error types for docstream-tree

use crate::node::Kind;

/// Result type for tree conversions
pub type Result<T> = std::result::Result<T, ConvertError>;

/// A tree that cannot be converted to the YAML layer's node representation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("mapping holds {count} nodes; keys and values must come in pairs")]
    OddMappingEntries { count: usize },

    #[error("document must wrap exactly one node, found {count}")]
    DocumentChildCount { count: usize },

    #[error("alias node has no anchor name")]
    EmptyAlias,

    #[error("invalid anchor name {name:?} on {kind} node")]
    InvalidAnchor { name: String, kind: Kind },

    #[error("document node nested inside a {parent} node")]
    NestedDocument { parent: Kind },
}

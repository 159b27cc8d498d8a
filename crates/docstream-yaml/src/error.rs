//! Error types for docstream-yaml

use crate::node::NodeKind;

/// Result type for marshalling operations
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors raised while marshalling a [`YamlNode`](crate::YamlNode)
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot emit a {kind} node as a mapping key")]
    UnsupportedKey { kind: NodeKind },

    #[error("invalid YAML structure: {0}")]
    InvalidStructure(String),
}

impl EmitError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidStructure(message.into())
    }
}

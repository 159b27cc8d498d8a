//! YAML marshalling for docstream
//!
//! This crate owns the library-native YAML node ([`YamlNode`]) and the
//! [`Marshaller`] seam encoders render through. The default marshaller,
//! [`BlockEmitter`], writes block-style YAML with tags, anchors, aliases and
//! node-attached comments.

pub mod emitter;
pub mod error;
pub mod node;
mod scalar;

pub use emitter::{BlockEmitter, Marshaller, to_string};
pub use error::EmitError;
pub use node::{NodeKind, NodeStyle, YamlNode};

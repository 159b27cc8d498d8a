//! Document tree for docstream
//!
//! Upstream producers build [`DocNode`] trees that carry, besides the data
//! itself, everything a plain serializer would drop: comments, blank lines,
//! directives and document boundaries. Encoders read these trees and convert
//! them to the YAML layer's native nodes with [`DocNode::to_yaml_node`].

pub mod convert;
pub mod error;
pub mod node;

pub use error::{ConvertError, Result};
pub use node::{DocNode, Kind, Style};

/// In-band token marking a document boundary inside `leading_content` or
/// `foot_comment`.
///
/// Producers place it on its own line; encoders replace any line containing
/// it with a document separator and never print the token itself.
pub const DOCUMENT_SEPARATOR_MARKER: &str = "$docstreamSeparator$";

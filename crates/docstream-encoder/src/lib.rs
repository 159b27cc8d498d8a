//! Format-preserving YAML encoder
//!
//! Renders one [`DocNode`](docstream_tree::DocNode) at a time as YAML while
//! keeping what a plain serializer drops: comments, blank lines, directives
//! and document separators.
//!
//! ```
//! use docstream_encoder::{Encoder, YamlEncoder, YamlPreferences};
//! use docstream_tree::DocNode;
//!
//! let encoder = YamlEncoder::new(YamlPreferences::default());
//! let node = DocNode::mapping([(DocNode::scalar("name"), DocNode::scalar("docstream"))])
//!     .with_foot_comment("the end");
//!
//! let mut out = Vec::new();
//! encoder.encode(&mut out, &node).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "name: docstream\n# the end\n");
//! ```

pub mod colorize;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod preferences;
pub mod printer;

pub use colorize::{AnsiColorizer, Colorizer};
pub use encoder::{Encoder, YamlEncoder};
pub use error::{Error, Result};
pub use preferences::YamlPreferences;
pub use printer::Printer;

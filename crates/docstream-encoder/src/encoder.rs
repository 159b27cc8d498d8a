//! YAML text encoder

use std::io::Write;
use std::sync::LazyLock;

use docstream_tree::{DOCUMENT_SEPARATOR_MARKER, DocNode, Kind};
use docstream_yaml::{BlockEmitter, Marshaller};
use regex::Regex;
use tracing::debug;

use crate::colorize::{AnsiColorizer, Colorizer};
use crate::error::Result;
use crate::preferences::YamlPreferences;

/// Lines already written as comments: optional whitespace, then `#`
static COMMENT_LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#").unwrap());

/// Common interface of the output encoders
pub trait Encoder: Send + Sync {
    /// Whether the format expresses aliases natively; if not, callers
    /// expand them before encoding
    fn can_handle_aliases(&self) -> bool;

    /// Write a document separator, if the format and preferences use one
    fn print_document_separator(&self, writer: &mut dyn Write) -> Result<()>;

    /// Write preserved comments, blank lines, directives and separator
    /// markers
    fn print_leading_content(&self, writer: &mut dyn Write, content: &str) -> Result<()>;

    /// Write one document node
    fn encode(&self, writer: &mut dyn Write, node: &DocNode) -> Result<()>;
}

/// Encoder producing YAML text
pub struct YamlEncoder {
    prefs: YamlPreferences,
    marshaller: Box<dyn Marshaller>,
    colorizer: Box<dyn Colorizer>,
}

impl std::fmt::Debug for YamlEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YamlEncoder")
            .field("prefs", &self.prefs)
            .finish_non_exhaustive()
    }
}

impl YamlEncoder {
    pub fn new(prefs: YamlPreferences) -> Self {
        Self {
            prefs,
            marshaller: Box::new(BlockEmitter::new()),
            colorizer: Box::new(AnsiColorizer::new()),
        }
    }

    /// Replace the YAML renderer
    pub fn with_marshaller(mut self, marshaller: impl Marshaller + 'static) -> Self {
        self.marshaller = Box::new(marshaller);
        self
    }

    /// Replace the colorizing post-processor
    pub fn with_colorizer(mut self, colorizer: impl Colorizer + 'static) -> Self {
        self.colorizer = Box::new(colorizer);
        self
    }

    /// Top-level scalar written as raw text.
    ///
    /// An empty value with no leading content stays empty; anything else
    /// gets a trailing newline.
    fn write_unwrapped_scalar(&self, writer: &mut dyn Write, node: &DocNode) -> Result<()> {
        if node.value.is_empty() && node.leading_content.is_empty() {
            return Ok(());
        }
        writer.write_all(node.value.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

fn needs_comment_prefix(line: &str) -> bool {
    !line.is_empty()
        && line != "\n"
        && !line.starts_with('%')
        && !COMMENT_LINE_PATTERN.is_match(line)
}

impl Encoder for YamlEncoder {
    fn can_handle_aliases(&self) -> bool {
        true
    }

    fn print_document_separator(&self, writer: &mut dyn Write) -> Result<()> {
        if self.prefs.print_doc_separators {
            debug!("writing document separator");
            writer.write_all(b"---\n")?;
        }
        Ok(())
    }

    fn print_leading_content(&self, writer: &mut dyn Write, content: &str) -> Result<()> {
        for line in content.split_inclusive('\n') {
            if line.contains(DOCUMENT_SEPARATOR_MARKER) {
                self.print_document_separator(writer)?;
                continue;
            }
            if needs_comment_prefix(line) {
                writer.write_all(b"# ")?;
            }
            writer.write_all(line.as_bytes())?;
        }

        // unterminated last line, marker lines included
        if !content.is_empty() && !content.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn encode(&self, writer: &mut dyn Write, node: &DocNode) -> Result<()> {
        debug!(node = %node, "encoding YAML");
        if node.kind == Kind::Scalar && self.prefs.unwrap_scalar {
            return self.write_unwrapped_scalar(writer, node);
        }

        let mut buffer = Vec::new();
        let destination: &mut dyn Write = if self.prefs.colorize {
            &mut buffer
        } else {
            &mut *writer
        };

        let mut target = node.to_yaml_node()?;
        let trailing_content = std::mem::take(&mut target.foot_comment);

        self.marshaller
            .marshal(&target, self.prefs.indent, &mut *destination)?;
        self.print_leading_content(destination, &trailing_content)?;

        if self.prefs.colorize {
            writer.write_all(&self.colorizer.colorize(&buffer))?;
        }
        Ok(())
    }
}

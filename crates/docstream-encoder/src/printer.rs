//! Multi-document printing

use std::io::Write;

use docstream_tree::{DOCUMENT_SEPARATOR_MARKER, DocNode};
use tracing::debug;

use crate::encoder::Encoder;
use crate::error::Result;

/// Drives an [`Encoder`] over a stream of documents.
///
/// Before every document after the first a separator is written, unless the
/// document's leading content already marks the boundary. Each document's
/// leading content is rendered ahead of the node itself.
#[derive(Debug)]
pub struct Printer<E> {
    encoder: E,
}

impl<E: Encoder> Printer<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Print one document at position `index` of the stream
    pub fn print_document(
        &self,
        writer: &mut dyn Write,
        index: usize,
        node: &DocNode,
    ) -> Result<()> {
        if index > 0 && !node.leading_content.contains(DOCUMENT_SEPARATOR_MARKER) {
            self.encoder.print_document_separator(writer)?;
        }
        self.encoder
            .print_leading_content(writer, &node.leading_content)?;
        self.encoder.encode(writer, node)
    }

    /// Print every document in order, stopping at the first failure
    pub fn print_documents<'a, I>(&self, writer: &mut dyn Write, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a DocNode>,
    {
        let mut count = 0;
        for (index, node) in documents.into_iter().enumerate() {
            self.print_document(writer, index, node)?;
            count += 1;
        }
        debug!(documents = count, "printed document stream");
        Ok(())
    }
}

//! Flat chunking: one entry per reference.
//!
//! The baseline strategy and the registry's default. It retrieves the
//! reference list at the deepest citation level and emits one entry per
//! reference, label equal to target:
//!
//! ```text
//! Scheme: ["book", "line"]  (depth 2)
//!
//! urn:x:1.1  ->  ("1.1", "1.1")
//! urn:x:1.2  ->  ("1.2", "1.2")
//! urn:x:2.1  ->  ("2.1", "2.1")
//! ```
//!
//! No grouping, no windowing. For a 12,000-line epic this produces a
//! 12,000-entry menu, which is exactly why the registry exists.

use crate::{passage, ChunkEntry, Chunker, CitationScheme, ReferenceSource, Result};

/// Emit one `(passage, passage)` entry per reference at `level`.
///
/// Shared by the flat and scheme strategies.
pub(crate) fn flat_entries(
    source: &dyn ReferenceSource,
    level: usize,
) -> Result<Vec<ChunkEntry>> {
    Ok(source
        .references(level)?
        .iter()
        .map(|reference| {
            let part = passage(reference);
            ChunkEntry::new(part, part)
        })
        .collect())
}

/// Flat chunker: one entry per deepest-level reference.
///
/// ## Example
///
/// ```rust
/// use reffs::{Chunker, CitationScheme, FlatChunker, StaticSource};
///
/// let scheme = CitationScheme::new(["book", "line"]);
/// let source = StaticSource::new(vec![
///     vec!["urn:x:1".into()],
///     vec!["urn:x:1.1".into(), "urn:x:1.2".into()],
/// ]);
///
/// let entries = FlatChunker.chunk(&scheme, &source)?;
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].label, "1.1");
/// assert_eq!(entries[0].target, "1.1");
/// # Ok::<(), reffs::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatChunker;

impl Chunker for FlatChunker {
    fn chunk(
        &self,
        scheme: &CitationScheme,
        source: &dyn ReferenceSource,
    ) -> Result<Vec<ChunkEntry>> {
        flat_entries(source, scheme.depth())
    }
}

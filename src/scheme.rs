//! Scheme-aware chunking: dispatch on the citation scheme's shape.
//!
//! Some text traditions have a conventional browsing granularity that the
//! flat strategy gets wrong. Verse epics cited book/poem/line are browsed
//! poem by poem; long poems cited book/lines want fixed windows. This
//! strategy encodes those conventions as a closed decision table:
//!
//! ```text
//! ["book", "poem", "line"]  ->  flat entries at level 2 (poems)
//! ["book", "lines"]         ->  delegate to LineChunker::default()
//! anything else             ->  flat entries at the deepest level
//! ```
//!
//! The match is exact, case-sensitive, and order-sensitive. There is no
//! inference from level-name semantics: a new tradition means a new table
//! entry. Unmatched shapes are not an error, they just get the default
//! treatment.

use crate::flat::flat_entries;
use crate::{ChunkEntry, Chunker, CitationScheme, LineChunker, ReferenceSource, Result};

/// Scheme-aware chunker with a closed shape table.
///
/// ## Example
///
/// ```rust
/// use reffs::{Chunker, CitationScheme, SchemeChunker, StaticSource};
///
/// let scheme = CitationScheme::new(["book", "poem", "line"]);
/// let source = StaticSource::new(vec![
///     vec!["urn:x:1".into()],
///     vec!["urn:x:1.1".into(), "urn:x:1.2".into()],
///     vec!["urn:x:1.1.1".into(), "urn:x:1.2.1".into()],
/// ]);
///
/// // Poem-level entries, not line-level
/// let entries = SchemeChunker.chunk(&scheme, &source)?;
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].label, "1.1");
/// # Ok::<(), reffs::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeChunker;

impl Chunker for SchemeChunker {
    fn chunk(
        &self,
        scheme: &CitationScheme,
        source: &dyn ReferenceSource,
    ) -> Result<Vec<ChunkEntry>> {
        let level = match scheme.levels() {
            [book, poem, line] if book == "book" && poem == "poem" && line == "line" => 2,
            [book, lines] if book == "book" && lines == "lines" => {
                return LineChunker::default().chunk(scheme, source);
            }
            _ => scheme.depth(),
        };
        flat_entries(source, level)
    }
}

//! Level grouping: windowed ranges that respect parent boundaries.
//!
//! Line windowing is blind to structure: a window can start at the end of
//! book 1 and finish in book 2, and a "1.598-2.27" label confuses more than
//! it helps. This strategy first buckets references under their parent node
//! (the first `level - 1` passage segments), then windows each bucket
//! separately:
//!
//! ```text
//! group_by = 20, scheme ["book", "line"]
//!
//! 1.1 .. 1.25, 2.1 .. 2.10
//!
//! ("1.1-1.20",  "1.1-1.20")
//! ("1.21-1.25", "1.21-1.25")   <- partial window, kept
//! ("2.1-2.10",  "2.1-2.10")
//! ```
//!
//! Two differences from [`LineChunker`](crate::LineChunker): partial
//! windows are emitted, and label equals target (the backing API accepts
//! range references, so the range itself is the fetchable unit).

use crate::{
    join_or_single, passage, ChunkEntry, Chunker, CitationScheme, ReferenceSource, Result,
};

/// Parent-aware grouping chunker.
///
/// ## Example
///
/// ```rust
/// use reffs::{Chunker, CitationScheme, LevelChunker, StaticSource};
///
/// let scheme = CitationScheme::new(["poem", "line"]);
/// let mut refs: Vec<String> = (1..=25).map(|n| format!("urn:x:1.{n}")).collect();
/// refs.extend((1..=5).map(|n| format!("urn:x:2.{n}")));
/// let source = StaticSource::new(vec![vec!["urn:x:1".into(), "urn:x:2".into()], refs]);
///
/// let entries = LevelChunker::new(20).chunk(&scheme, &source)?;
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[0].label, "1.1-1.20");
/// assert_eq!(entries[1].label, "1.21-1.25");
/// assert_eq!(entries[2].label, "2.1-2.5");
/// # Ok::<(), reffs::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LevelChunker {
    level: Option<usize>,
    group_by: usize,
}

impl LevelChunker {
    /// Create a new level chunker grouping `group_by` references per entry.
    ///
    /// Retrieves at the scheme's deepest level unless overridden with
    /// [`with_level`](Self::with_level).
    ///
    /// # Panics
    ///
    /// Panics if `group_by == 0`.
    #[must_use]
    pub fn new(group_by: usize) -> Self {
        assert!(group_by > 0, "group_by must be > 0");
        Self {
            level: None,
            group_by,
        }
    }

    /// Retrieve at `level` instead of the scheme's depth.
    ///
    /// Levels outside `1..=depth` are clamped back to the depth at chunk
    /// time; an out-of-range override is permissive, not an error.
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    /// The number of references grouped per entry.
    #[must_use]
    pub fn group_by(&self) -> usize {
        self.group_by
    }
}

impl Default for LevelChunker {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Chunker for LevelChunker {
    fn chunk(
        &self,
        scheme: &CitationScheme,
        source: &dyn ReferenceSource,
    ) -> Result<Vec<ChunkEntry>> {
        let depth = scheme.depth();
        let level = match self.level {
            Some(level) if level >= 1 && level <= depth => level,
            _ => depth,
        };

        let references = source.references(level)?;

        // Bucket passages under their parent prefix, first occurrence order.
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        for reference in &references {
            let part = passage(reference);
            let parent = parent_prefix(part, level);
            match groups.iter_mut().find(|(key, _)| *key == parent) {
                Some((_, members)) => members.push(part.to_string()),
                None => groups.push((parent, vec![part.to_string()])),
            }
        }

        Ok(groups
            .iter()
            .flat_map(|(_, members)| members.chunks(self.group_by))
            .map(|window| {
                let range = join_or_single(&window[0], &window[window.len() - 1]);
                ChunkEntry::new(range.clone(), range)
            })
            .collect())
    }
}

/// The first `level - 1` dot-segments of a passage, joined back with dots.
///
/// At level 1 every passage shares the empty prefix, so the whole text
/// forms a single group.
fn parent_prefix(part: &str, level: usize) -> String {
    part.split('.')
        .take(level.saturating_sub(1))
        .collect::<Vec<_>>()
        .join(".")
}

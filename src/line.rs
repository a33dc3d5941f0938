//! Line windowing: fixed-size range entries.
//!
//! Collapses every `window` consecutive deepest-level references into one
//! entry whose label is a range and whose target is the window's first
//! reference, the anchor a browser can actually navigate to.
//!
//! ```text
//! window = 30
//!
//! References: 1, 2, ..., 35
//!
//! Entry 0: ("1-30", "1")
//! References 31..35: no entry
//! ```
//!
//! ## The Trailing Partial Window
//!
//! A final group of fewer than `window` references produces no entry, so
//! the last `len % window` references of a text are unreachable through
//! this strategy's output. Downstream navigation contracts depend on this
//! exact output, so it is preserved rather than fixed.
//! Callers who need every reference reachable should
//! use [`LevelChunker`](crate::LevelChunker), which keeps partials.

use crate::{passage, ChunkEntry, Chunker, CitationScheme, ReferenceSource, Result};

/// Default number of references per window.
pub const DEFAULT_WINDOW: usize = 30;

/// Fixed-size window chunker over deepest-level references.
///
/// ## Example
///
/// ```rust
/// use reffs::{Chunker, CitationScheme, LineChunker, StaticSource};
///
/// let scheme = CitationScheme::new(["line"]);
/// let source = StaticSource::new(vec![
///     (1..=65).map(|n| format!("urn:x:{n}")).collect(),
/// ]);
///
/// let entries = LineChunker::new(30).chunk(&scheme, &source)?;
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].label, "1-30");
/// assert_eq!(entries[1].label, "31-60");
/// assert_eq!(entries[1].target, "31");
/// // references 61..65: dropped (trailing partial window)
/// # Ok::<(), reffs::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LineChunker {
    window: usize,
}

impl LineChunker {
    /// Create a new line chunker.
    ///
    /// # Arguments
    ///
    /// * `window` - Number of consecutive references per entry
    ///
    /// # Panics
    ///
    /// Panics if `window == 0`. This is a configuration error, not a
    /// runtime data error, so it fails fast at construction.
    #[must_use]
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "window must be > 0");
        Self { window }
    }

    /// The number of references per window.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for LineChunker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Chunker for LineChunker {
    fn chunk(
        &self,
        scheme: &CitationScheme,
        source: &dyn ReferenceSource,
    ) -> Result<Vec<ChunkEntry>> {
        let references = source.references(scheme.depth())?;
        let passages: Vec<&str> = references.iter().map(|r| passage(r)).collect();

        // chunks_exact drops the trailing partial window.
        Ok(passages
            .chunks_exact(self.window)
            .map(|window| {
                let first = window[0];
                let last = window[window.len() - 1];
                ChunkEntry::new(format!("{first}-{last}"), first)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticSource;

    fn lines(n: usize) -> StaticSource {
        StaticSource::new(vec![(1..=n).map(|i| format!("urn:x:{i}")).collect()])
    }

    #[test]
    fn test_exact_multiple() {
        let scheme = CitationScheme::new(["line"]);
        let entries = LineChunker::new(30).chunk(&scheme, &lines(60)).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ChunkEntry::new("1-30", "1"));
        assert_eq!(entries[1], ChunkEntry::new("31-60", "31"));
    }

    #[test]
    fn test_trailing_partial_dropped() {
        let scheme = CitationScheme::new(["line"]);
        let entries = LineChunker::new(30).chunk(&scheme, &lines(35)).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], ChunkEntry::new("1-30", "1"));
    }

    #[test]
    fn test_shorter_than_one_window() {
        let scheme = CitationScheme::new(["line"]);
        let entries = LineChunker::new(30).chunk(&scheme, &lines(29)).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let scheme = CitationScheme::new(["line"]);
        let entries = LineChunker::new(30).chunk(&scheme, &lines(0)).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_window_of_one() {
        let scheme = CitationScheme::new(["line"]);
        let entries = LineChunker::new(1).chunk(&scheme, &lines(3)).unwrap();

        assert_eq!(entries.len(), 3);
        // A one-element window still formats as a range.
        assert_eq!(entries[0], ChunkEntry::new("1-1", "1"));
    }

    #[test]
    fn test_default_window_is_30() {
        assert_eq!(LineChunker::default().window(), DEFAULT_WINDOW);
    }

    #[test]
    #[should_panic]
    fn test_zero_window_panics() {
        let _ = LineChunker::new(0);
    }
}

//! Reference string helpers and an in-memory source.
//!
//! A reference is `namespace:passage` where the passage is `.`-delimited,
//! coarsest segment first:
//!
//! ```text
//! urn:cts:latinLit:phi0959.phi001.perseus-lat2:1.2.5
//! └──────────────── namespace ──────────────┘ └─┬─┘
//!                                          passage (book 1, poem 2, line 5)
//! ```
//!
//! This crate parses references by delimiter splitting only. It never
//! validates the namespace or the segment values; that grammar belongs to
//! the backing API.

use crate::{Error, ReferenceSource, Result};

/// The passage part of a reference: everything after the last `:`.
///
/// A reference with no `:` is treated as already being a bare passage.
///
/// ```rust
/// use reffs::passage;
///
/// assert_eq!(passage("urn:cts:latinLit:phi0959.phi001:1.2.5"), "1.2.5");
/// assert_eq!(passage("1.2.5"), "1.2.5");
/// ```
#[must_use]
pub fn passage(reference: &str) -> &str {
    reference.rsplit(':').next().unwrap_or(reference)
}

/// Join two passage references into a range label, collapsing `x-x` to `x`.
///
/// ```rust
/// use reffs::join_or_single;
///
/// assert_eq!(join_or_single("1.1", "1.20"), "1.1-1.20");
/// assert_eq!(join_or_single("1.1", "1.1"), "1.1");
/// ```
#[must_use]
pub fn join_or_single(start: &str, end: &str) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}-{end}")
    }
}

/// An in-memory [`ReferenceSource`].
///
/// Holds one reference list per citation level, index 0 being level 1.
/// Useful in tests and for callers that already fetched the lists:
///
/// ```rust
/// use reffs::{ReferenceSource, StaticSource};
///
/// let source = StaticSource::new(vec![
///     vec!["urn:x:1".into(), "urn:x:2".into()],           // level 1: books
///     vec!["urn:x:1.1".into(), "urn:x:2.1".into()],       // level 2: lines
/// ]);
///
/// assert_eq!(source.references(1).unwrap().len(), 2);
/// assert!(source.references(3).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    levels: Vec<Vec<String>>,
}

impl StaticSource {
    /// Create a source from per-level reference lists, level 1 first.
    #[must_use]
    pub fn new(levels: Vec<Vec<String>>) -> Self {
        Self { levels }
    }

    /// The depth this source can answer for.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

impl ReferenceSource for StaticSource {
    fn references(&self, level: usize) -> Result<Vec<String>> {
        level
            .checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .cloned()
            .ok_or(Error::LevelOutOfRange {
                level,
                depth: self.levels.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passage_takes_last_colon_segment() {
        assert_eq!(passage("urn:cts:greekLit:tlg0012.tlg001:1.1"), "1.1");
        assert_eq!(passage("a:b:c"), "c");
        assert_eq!(passage("1.2"), "1.2");
        assert_eq!(passage(""), "");
    }

    #[test]
    fn test_join_or_single() {
        assert_eq!(join_or_single("1", "30"), "1-30");
        assert_eq!(join_or_single("2.5", "2.5"), "2.5");
    }

    #[test]
    fn test_static_source_levels() {
        let source = StaticSource::new(vec![vec!["urn:x:1".into()]]);
        assert_eq!(source.depth(), 1);
        assert_eq!(source.references(1).unwrap(), vec!["urn:x:1".to_string()]);
    }

    #[test]
    fn test_static_source_out_of_range() {
        let source = StaticSource::new(vec![vec!["urn:x:1".into()]]);
        assert!(matches!(
            source.references(2),
            Err(Error::LevelOutOfRange { level: 2, depth: 1 })
        ));
        assert!(source.references(0).is_err());
    }
}

//! Citation scheme metadata.

/// The ordered hierarchy levels of one text's citation scheme.
///
/// A text cited book/poem/line has depth 3; its references carry three
/// dot-delimited passage segments, coarsest first. The scheme comes from the
/// text's metadata record and is read-only to every strategy: chunkers look
/// at its shape and depth, never at the underlying document.
///
/// ```rust
/// use reffs::CitationScheme;
///
/// let scheme = CitationScheme::new(["book", "poem", "line"]);
/// assert_eq!(scheme.depth(), 3);
/// assert_eq!(scheme.levels(), ["book", "poem", "line"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationScheme {
    levels: Vec<String>,
}

impl CitationScheme {
    /// Create a scheme from ordered level names, coarsest first.
    #[must_use]
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            levels: levels.into_iter().map(Into::into).collect(),
        }
    }

    /// The named levels, coarsest first.
    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// The number of citation levels. This is the level strategies retrieve
    /// at by default.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Whether the scheme declares no levels at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_matches_level_count() {
        let scheme = CitationScheme::new(["book", "line"]);
        assert_eq!(scheme.depth(), 2);
        assert!(!scheme.is_empty());
    }

    #[test]
    fn test_empty_scheme() {
        let scheme = CitationScheme::new(Vec::<String>::new());
        assert_eq!(scheme.depth(), 0);
        assert!(scheme.is_empty());
    }
}

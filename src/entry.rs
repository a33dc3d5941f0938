//! The ChunkEntry type: one navigable unit in a passage browser.

/// A navigation entry pairing a human-facing label with a fetchable target.
///
/// The `target` is always a reference string the backing API will accept;
/// the `label` is what the reader sees in the menu. For flat strategies the
/// two coincide; for windowed strategies the label is a range:
///
/// ```rust
/// use reffs::ChunkEntry;
///
/// // A single line
/// let entry = ChunkEntry::new("1.5", "1.5");
/// assert_eq!(entry.label, entry.target);
///
/// // A 30-line window anchored at its first line
/// let entry = ChunkEntry::new("1-30", "1");
/// assert_eq!(entry.label, "1-30");
/// assert_eq!(entry.target, "1");
/// ```
///
/// ## Ordering
///
/// Entries carry no index of their own: a `Vec<ChunkEntry>` is meaningful
/// only as an ordered sequence, and every strategy in this crate preserves
/// the retrieval order of the source references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkEntry {
    /// The human-facing label (a passage reference or a range like `"1-30"`).
    pub label: String,
    /// The reference string used to fetch this unit.
    pub target: String,
}

impl ChunkEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for ChunkEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.label == self.target {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{} -> {}", self.label, self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_folds_identical_pairs() {
        assert_eq!(ChunkEntry::new("1.1", "1.1").to_string(), "1.1");
        assert_eq!(ChunkEntry::new("1-30", "1").to_string(), "1-30 -> 1");
    }
}

//! # reffs
//!
//! Citation reference chunking for passage browsers.
//!
//! ## The Problem
//!
//! Digital-library APIs address texts through hierarchical citation schemes:
//! a reference like `urn:cts:latinLit:phi0959.phi001:1.2.5` names book 1,
//! poem 2, line 5 of a specific edition. When a reader browses such a text,
//! the API hands back a flat ordered list of every valid reference at some
//! citation depth. Nobody wants a navigation menu with 15,000 line entries.
//!
//! The list has to be folded into human-presentable units, and the right
//! fold depends on the structural grammar of the text:
//!
//! - A verse epic cited book/poem/line reads best poem by poem
//! - A long poem cited only by running line number wants fixed windows
//!   ("1-30", "31-60", ...)
//! - Prose cited book/chapter/section is usually fine at the deepest level
//!
//! This crate is the folding engine: strategies that turn an ordered list of
//! references into an ordered list of `(label, target)` navigation entries,
//! plus a registry that picks the strategy per text identity.
//!
//! ## Chunking Strategies
//!
//! ### Flat (Baseline)
//!
//! One entry per reference at the deepest citation level, label = target.
//!
//! ```text
//! References: ["urn:x:1.1", "urn:x:1.2", "urn:x:1.3"]
//!
//! Entry 0: ("1.1", "1.1")
//! Entry 1: ("1.2", "1.2")
//! Entry 2: ("1.3", "1.3")
//! ```
//!
//! **When to use**: Short texts, the safe default for unknown schemes.
//! **Weakness**: Unusable menus for texts with thousands of leaf references.
//!
//! ### Scheme-Aware
//!
//! Dispatches on the exact shape of the citation scheme. `book/poem/line`
//! texts are listed at poem level; `book/lines` texts delegate to line
//! windowing; every other shape falls back to flat. The table is closed and
//! explicit: new shapes mean new table entries, not inference.
//!
//! **When to use**: Mixed corpora where a handful of known traditions need
//! special treatment.
//!
//! ### Line Windowing
//!
//! Collapse every `window` consecutive references into one range entry.
//!
//! ```text
//! References: ["urn:x:1", ..., "urn:x:35"], window = 30
//!
//! Entry 0: ("1-30", "1")     <- label is a range, target the anchor
//! (refs 31..35 form no entry: trailing partial windows are dropped)
//! ```
//!
//! **When to use**: Line-cited poetry, inscriptions, anything cited by a
//! single running counter.
//! **Weakness**: The trailing partial window is dropped, a quirk preserved
//! because existing navigation contracts depend on it.
//!
//! ### Level Grouping
//!
//! Group references under their parent node (book, poem), then window each
//! group. Unlike line windowing, partial windows are emitted.
//!
//! ```text
//! References: ["1.1" .. "1.25", "2.1" .. "2.10"], group_by = 20
//!
//! Entry 0: ("1.1-1.20", "1.1-1.20")
//! Entry 1: ("1.21-1.25", "1.21-1.25")   <- partial, kept
//! Entry 2: ("2.1-2.10", "2.1-2.10")
//! ```
//!
//! **When to use**: The best general-purpose choice for deep schemes; range
//! labels never span a parent boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use reffs::{Chunker, CitationScheme, FlatChunker, LineChunker, StaticSource};
//!
//! let scheme = CitationScheme::new(["line"]);
//! let source = StaticSource::new(vec![
//!     (1..=70).map(|n| format!("urn:x:{n}")).collect(),
//! ]);
//!
//! // One entry per line
//! let entries = FlatChunker.chunk(&scheme, &source)?;
//! assert_eq!(entries.len(), 70);
//!
//! // Windows of 30 lines
//! let entries = LineChunker::new(30).chunk(&scheme, &source)?;
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].label, "1-30");
//! assert_eq!(entries[0].target, "1");
//! # Ok::<(), reffs::Error>(())
//! ```
//!
//! ## Per-Text Dispatch
//!
//! ```rust
//! use reffs::{ChunkerRegistry, CitationScheme, LineChunker, StaticSource};
//!
//! let mut registry = ChunkerRegistry::new(); // flat default
//! registry.register("urn:cts:latinLit:phi1020.phi001", LineChunker::default());
//!
//! let scheme = CitationScheme::new(["line"]);
//! let source = StaticSource::new(vec![
//!     (1..=60).map(|n| format!("urn:x:{n}")).collect(),
//! ]);
//!
//! // Registered identity: windowed
//! let entries = registry.chunk("urn:cts:latinLit:phi1020.phi001", &scheme, &source)?;
//! assert_eq!(entries.len(), 2);
//!
//! // Unknown identity: falls back to the default, one entry per reference
//! let entries = registry.chunk("urn:cts:greekLit:tlg0012.tlg001", &scheme, &source)?;
//! assert_eq!(entries.len(), 60);
//! # Ok::<(), reffs::Error>(())
//! ```
//!
//! ## Choosing a Strategy
//!
//! | Strategy | Output size | Labels | Partial windows |
//! |----------|-------------|--------|-----------------|
//! | Flat | one per reference | passage | n/a |
//! | Scheme | shape-dependent | passage or range | per delegate |
//! | Line | `floor(n / window)` | range | dropped |
//! | Level | per parent group | range | kept |
//!
//! Strategies never reorder, deduplicate, or fabricate entries; output order
//! is always the retrieval order of the upstream reference list.

mod citation;
mod entry;
mod error;
mod flat;
mod level;
mod line;
mod reference;
mod registry;
mod scheme;

pub use citation::CitationScheme;
pub use entry::ChunkEntry;
pub use error::{Error, Result};
pub use flat::FlatChunker;
pub use level::LevelChunker;
pub use line::LineChunker;
pub use reference::{join_or_single, passage, StaticSource};
pub use registry::ChunkerRegistry;
pub use scheme::SchemeChunker;

/// A reference chunking strategy.
///
/// All chunkers implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use reffs::{Chunker, CitationScheme, FlatChunker, LineChunker, StaticSource};
///
/// fn browse(
///     chunker: &dyn Chunker,
///     scheme: &CitationScheme,
///     source: &reffs::StaticSource,
/// ) -> reffs::Result<Vec<reffs::ChunkEntry>> {
///     chunker.chunk(scheme, source)
/// }
///
/// let scheme = CitationScheme::new(["line"]);
/// let source = StaticSource::new(vec![vec!["urn:x:1".into(), "urn:x:2".into()]]);
///
/// let flat = FlatChunker;
/// let line = LineChunker::new(2);
///
/// let entries1 = browse(&flat, &scheme, &source)?;
/// let entries2 = browse(&line, &scheme, &source)?;
/// # Ok::<(), reffs::Error>(())
/// ```
pub trait Chunker: Send + Sync {
    /// Fold the references of one text into navigation entries.
    ///
    /// Each entry is a [`ChunkEntry`] pairing a human-facing label with the
    /// reference string used to fetch that unit. Entries come back in the
    /// retrieval order of the underlying reference list.
    ///
    /// # Errors
    ///
    /// Propagates any failure from `source` unchanged. Strategies perform
    /// no retry and no fallback on retrieval errors.
    fn chunk(
        &self,
        scheme: &CitationScheme,
        source: &dyn ReferenceSource,
    ) -> Result<Vec<ChunkEntry>>;
}

/// Supplies the valid references of one text at a given citation level.
///
/// This is the crate's only boundary with the backing API: implementations
/// are bound to a specific text at construction and must return references
/// in canonical document order. A strategy issues at most one `references`
/// call per invocation, so callers are free to cache per level.
pub trait ReferenceSource {
    /// The ordered reference strings at `level` (1-based, 1 = coarsest).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LevelOutOfRange`] if `level` exceeds the text's
    /// declared depth, or [`Error::Retrieval`] for upstream failures.
    fn references(&self, level: usize) -> Result<Vec<String>>;
}

//! Per-text strategy registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{ChunkEntry, Chunker, CitationScheme, FlatChunker, ReferenceSource, Result};

/// Maps text identities to chunking strategies, with a mandatory default.
///
/// Built once at configuration time and read-only afterwards, so it is safe
/// to share across request handlers without locking. Lookup misses are
/// normal: an unregistered identity simply gets the default strategy.
///
/// ## Example
///
/// ```rust
/// use reffs::{ChunkerRegistry, LevelChunker, SchemeChunker};
///
/// let mut registry = ChunkerRegistry::with_default(LevelChunker::new(25));
/// registry.register(
///     "urn:cts:pdlrefwk:viaf88890045.003.perseus-eng1",
///     SchemeChunker,
/// );
/// ```
pub struct ChunkerRegistry {
    strategies: HashMap<String, Arc<dyn Chunker>>,
    default: Arc<dyn Chunker>,
}

impl ChunkerRegistry {
    /// Create a registry whose default strategy is [`FlatChunker`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_default(FlatChunker)
    }

    /// Create a registry with an explicit default strategy.
    #[must_use]
    pub fn with_default<C: Chunker + 'static>(default: C) -> Self {
        Self {
            strategies: HashMap::new(),
            default: Arc::new(default),
        }
    }

    /// Register a strategy for one text identity.
    ///
    /// Registering the same identity twice replaces the earlier strategy.
    pub fn register<C: Chunker + 'static>(&mut self, identity: impl Into<String>, chunker: C) {
        self.strategies.insert(identity.into(), Arc::new(chunker));
    }

    /// The strategy that would handle `identity`.
    #[must_use]
    pub fn get(&self, identity: &str) -> &dyn Chunker {
        self.strategies
            .get(identity)
            .map_or(self.default.as_ref(), |chunker| chunker.as_ref())
    }

    /// Chunk one text's references with the strategy registered for it,
    /// falling back to the default for unknown identities.
    ///
    /// # Errors
    ///
    /// Propagates the selected strategy's error unchanged.
    pub fn chunk(
        &self,
        identity: &str,
        scheme: &CitationScheme,
        source: &dyn ReferenceSource,
    ) -> Result<Vec<ChunkEntry>> {
        self.get(identity).chunk(scheme, source)
    }
}

impl Default for ChunkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineChunker, StaticSource};

    fn lines(n: usize) -> StaticSource {
        StaticSource::new(vec![(1..=n).map(|i| format!("urn:x:{i}")).collect()])
    }

    #[test]
    fn test_registered_identity_uses_its_strategy() {
        let mut registry = ChunkerRegistry::new();
        registry.register("urn:cts:x:text", LineChunker::new(10));

        let scheme = CitationScheme::new(["line"]);
        let entries = registry
            .chunk("urn:cts:x:text", &scheme, &lines(25))
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "1-10");
    }

    #[test]
    fn test_unknown_identity_falls_back_to_default() {
        let mut registry = ChunkerRegistry::new();
        registry.register("urn:cts:x:text", LineChunker::new(10));

        let scheme = CitationScheme::new(["line"]);
        let via_registry = registry.chunk("urn:cts:x:other", &scheme, &lines(25)).unwrap();
        let direct = FlatChunker.chunk(&scheme, &lines(25)).unwrap();
        assert_eq!(via_registry, direct);
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = ChunkerRegistry::new();
        registry.register("urn:cts:x:text", LineChunker::new(10));
        registry.register("urn:cts:x:text", LineChunker::new(5));

        let scheme = CitationScheme::new(["line"]);
        let entries = registry
            .chunk("urn:cts:x:text", &scheme, &lines(25))
            .unwrap();
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChunkerRegistry>();
    }
}

//! Error types for reffs.

/// Errors that can occur during reference chunking.
///
/// Strategies never swallow these: a failure from the upstream reference
/// source passes through the dispatcher unchanged, and the rendering layer
/// decides how to surface it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested citation level exceeds the text's declared depth.
    #[error("citation level {level} out of range for a text of depth {depth}")]
    LevelOutOfRange {
        /// The requested level (1-based).
        level: usize,
        /// The depth the text declares.
        depth: usize,
    },

    /// The upstream reference retrieval failed.
    #[error("reference retrieval failed: {0}")]
    Retrieval(String),
}

/// Result type for reffs operations.
pub type Result<T> = std::result::Result<T, Error>;

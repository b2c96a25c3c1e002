//! Error types for path parsing and manipulation.
//!
//! Every failure here is synchronous and deterministic for a given input;
//! nothing is retryable and nothing is safe to swallow.

/// Errors produced when parsing or deriving BIP44 paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The input does not follow the BIP44 path grammar.
    ///
    /// Keeps the full original input alongside the reason so callers can
    /// report exactly what they were handed.
    #[error("malformed path: {reason} in {input:?}")]
    MalformedPath {
        /// What the grammar rejected, naming the offending segment.
        reason: String,
        /// The full original input string.
        input: String,
    },

    /// The path has no elements to operate on.
    #[error("path has no elements")]
    EmptyPath,

    /// An index would exceed the 31-bit range reserved for child numbers.
    #[error("index {0} exceeds the 31-bit range")]
    IndexOverflow(u32),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PathError>;

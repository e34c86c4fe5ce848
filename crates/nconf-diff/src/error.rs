//! Error types for the diff crate.

/// Errors that can occur during a comparison.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The ignore pattern is not a valid regular expression.
    #[error("invalid ignore pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Why it failed to compile.
        #[source]
        source: regex::Error,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;

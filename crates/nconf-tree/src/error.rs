//! Error types for the tree crate.

use std::path::PathBuf;

/// Errors that can occur while loading a configuration.
///
/// Parsing itself never fails; only reading the source can.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path:?}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for tree results.
pub type TreeResult<T> = Result<T, TreeError>;

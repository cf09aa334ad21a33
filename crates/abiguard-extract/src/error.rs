//! Error types for the extract crate.

use std::path::PathBuf;

use abiguard_types::TypeError;

/// Errors that abort an extraction pass. There is no partial result.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk contracts directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The version marker was found but its value is not a non-negative integer.
    #[error("{}:{line}: ABI version {literal:?} is not a non-negative integer", path.display())]
    InvalidVersion {
        path: PathBuf,
        line: usize,
        literal: String,
    },

    /// An inspector row for a function or event did not have the expected columns.
    #[error("malformed ABI row for {contract}: {reason}: {row:?}")]
    MalformedRow {
        contract: String,
        row: String,
        reason: &'static str,
    },

    /// The inspector could not produce rows for a contract.
    #[error("ABI inspection of {contract} failed: {reason}")]
    Inspector { contract: String, reason: String },

    /// Snapshot invariant violated (duplicate contract name).
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Convenience alias for extract results.
pub type ExtractResult<T> = Result<T, ExtractError>;

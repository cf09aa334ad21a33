use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// Two tracked source files share a contract name within one pass.
    #[error(
        "duplicate contract name {name}: declared in {} and {}; upgradeable contracts must have unique names",
        first.display(),
        second.display()
    )]
    DuplicateContract {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("unknown ABI entry kind: {0}")]
    UnknownEntryKind(String),
}

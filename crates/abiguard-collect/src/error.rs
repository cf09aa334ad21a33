//! Error types for snapshot collection.

use abiguard_extract::ExtractError;
use thiserror::Error;

/// An external tool could not be started or exited unsuccessfully.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{command}` failed: {reason}")]
pub struct ToolError {
    /// The command line that was run.
    pub command: String,
    /// Spawn error, or exit status plus trimmed stderr.
    pub reason: String,
}

/// Errors that abort a collection run.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Switching source states requires a clean working tree.
    #[error("working tree has uncommitted changes; commit or stash them before running the ABI check")]
    DirtyWorkingTree,

    /// The baseline checkout left the repository on the original ref.
    #[error("checkout of {reference} did not switch away from {current}; commit or stash all changes before running the ABI check")]
    CheckoutDidNotSwitch { reference: String, current: String },

    /// A git or build tool invocation failed.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The scratch directory for the baseline worktree could not be created.
    #[error("failed to create baseline scratch directory: {0}")]
    Scratch(#[source] std::io::Error),

    /// Extraction of a snapshot failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Convenience alias for collection results.
pub type CollectResult<T> = Result<T, CollectError>;

//! Explicit naming of the source state a snapshot is taken from.

use std::fmt;

/// Which source state to collect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateSelector {
    /// The repository's working tree as it is.
    WorkingTree,
    /// A baseline ref, optionally fetched from a remote first.
    Baseline(BaselineRef),
}

impl fmt::Display for StateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkingTree => f.write_str("working tree"),
            Self::Baseline(baseline) => write!(f, "baseline {}", baseline.revision()),
        }
    }
}

/// A baseline branch or ref.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaselineRef {
    /// Remote to fetch from before materializing; `None` uses the local ref.
    pub remote: Option<String>,
    /// Branch, tag, or commit.
    pub reference: String,
}

impl BaselineRef {
    pub fn new(remote: Option<String>, reference: impl Into<String>) -> Self {
        Self {
            remote,
            reference: reference.into(),
        }
    }

    /// The revision to materialize: `remote/reference` when a remote is set.
    pub fn revision(&self) -> String {
        match &self.remote {
            Some(remote) => format!("{remote}/{}", self.reference),
            None => self.reference.clone(),
        }
    }
}

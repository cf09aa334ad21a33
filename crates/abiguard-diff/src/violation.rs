//! Violations: surface changes made without a version bump.

use std::path::PathBuf;

use abiguard_types::Identifier;
use serde::Serialize;

/// A detected surface change that was not accompanied by a version increase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Contract name.
    pub contract: String,
    /// Current source path, or the baseline path when the contract is gone.
    pub path: PathBuf,
    /// Current ABI version; `None` when the contract no longer exists.
    pub current_version: Option<u64>,
    /// Baseline ABI version.
    pub baseline_version: u64,
    /// The smallest version that would make this change acceptable.
    pub suggested_version: u64,
    /// What changed.
    pub change: Change,
}

impl Violation {
    /// Bare identifier name, if the violation concerns a single identifier.
    pub fn identifier(&self) -> Option<&str> {
        match &self.change {
            Change::Modified { old, .. } | Change::Removed { old } => Some(&old.name),
            Change::ContractRemoved { .. } => None,
        }
    }

    pub(crate) fn sort_key(&self) -> (&str, &str, &str) {
        let declaration = match &self.change {
            Change::Modified { old, .. } | Change::Removed { old } => old.declaration.as_str(),
            Change::ContractRemoved { .. } => "",
        };
        (&self.contract, self.identifier().unwrap_or(""), declaration)
    }
}

/// The kind of surface change behind a violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Change {
    /// The identifier still exists but its declaration or signature differs.
    Modified { old: Identifier, new: Identifier },
    /// The identifier no longer exists and nothing replaced it.
    Removed { old: Identifier },
    /// The whole contract (or its version marker) disappeared.
    ContractRemoved { identifiers: usize },
}

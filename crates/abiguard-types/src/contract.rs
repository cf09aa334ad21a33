use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::identifier::{Identifier, IdentifierKeying};

/// The declared ABI version and external surface of one contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    /// Source file relative to the scanned root. Diagnostics only.
    pub path: PathBuf,
    /// Value of the contract's `ABI_VERSION` constant.
    pub abi_version: u64,
    /// Identifiers keyed per [`IdentifierKeying`].
    pub identifiers: BTreeMap<String, Identifier>,
}

impl ContractMetadata {
    /// Create metadata with an empty surface.
    pub fn new(path: impl Into<PathBuf>, abi_version: u64) -> Self {
        Self {
            path: path.into(),
            abi_version,
            identifiers: BTreeMap::new(),
        }
    }

    /// Insert an identifier under its key. A later identifier with the same
    /// key replaces the earlier one.
    pub fn insert(&mut self, identifier: Identifier, keying: IdentifierKeying) {
        let key = identifier.key(keying).to_string();
        self.identifiers.insert(key, identifier);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, identifier: Identifier, keying: IdentifierKeying) -> Self {
        self.insert(identifier, keying);
        self
    }

    /// Returns `true` if both contracts expose exactly the same surface.
    pub fn same_surface(&self, other: &ContractMetadata) -> bool {
        self.identifiers == other.identifiers
    }
}

//! Snapshots: every tracked contract of one source state.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::contract::ContractMetadata;
use crate::error::TypeError;

/// All tracked contracts of one source state, keyed by contract name.
///
/// Contract names are unique within a snapshot; [`Snapshot::insert`]
/// refuses to overwrite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    contracts: BTreeMap<String, ContractMetadata>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contract, failing if the name is already taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        metadata: ContractMetadata,
    ) -> Result<(), TypeError> {
        match self.contracts.entry(name.into()) {
            btree_map::Entry::Occupied(existing) => Err(TypeError::DuplicateContract {
                name: existing.key().clone(),
                first: existing.get().path.clone(),
                second: metadata.path,
            }),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(metadata);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ContractMetadata> {
        self.contracts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contracts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Contracts in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ContractMetadata> {
        self.contracts.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contracts.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a String, &'a ContractMetadata);
    type IntoIter = btree_map::Iter<'a, String, ContractMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.contracts.iter()
    }
}

/// The two independently produced snapshots of one comparison run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotPair {
    pub current: Snapshot,
    pub baseline: Snapshot,
}

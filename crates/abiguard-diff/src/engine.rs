//! Snapshot comparison.
//!
//! For every contract in the baseline, each baseline identifier is looked up
//! in the current contract by key. Differences only matter when the current
//! ABI version is not greater than the baseline one.

use abiguard_types::{ContractMetadata, Identifier, Snapshot};
use serde::Serialize;
use tracing::warn;

use crate::policy::DiffPolicy;
use crate::violation::{Change, Violation};

/// The result of comparing two snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AbiDiff {
    /// Violations sorted by contract, identifier name, and old declaration.
    pub violations: Vec<Violation>,
    /// Contracts present in both snapshots.
    pub compared: Vec<String>,
    /// Contracts only present in the current snapshot.
    pub added: Vec<String>,
}

impl AbiDiff {
    /// Returns `true` if there are no violations.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Distinct contracts with at least one violation, in order.
    pub fn violating_contracts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.violations.iter().map(|v| v.contract.as_str()).collect();
        names.dedup();
        names
    }
}

/// Compare the current snapshot against the baseline.
///
/// - Contracts only in `current` are additive and never violate.
/// - Contracts whose current version is greater than the baseline's never violate.
/// - Otherwise every modified baseline identifier is a violation, and removed
///   identifiers or contracts are violations unless the policy exempts them.
pub fn compare(current: &Snapshot, baseline: &Snapshot, policy: &DiffPolicy) -> AbiDiff {
    let mut diff = AbiDiff::default();

    for (name, base) in baseline {
        let Some(cur) = current.get(name) else {
            if policy.removals_need_bump() {
                diff.violations.push(Violation {
                    contract: name.clone(),
                    path: base.path.clone(),
                    current_version: None,
                    baseline_version: base.abi_version,
                    suggested_version: base.abi_version.saturating_add(1),
                    change: Change::ContractRemoved {
                        identifiers: base.identifiers.len(),
                    },
                });
            }
            continue;
        };

        diff.compared.push(name.clone());

        if cur.abi_version < base.abi_version {
            warn!(
                contract = %name,
                current = cur.abi_version,
                baseline = base.abi_version,
                "ABI version decreased"
            );
        }
        if cur.abi_version > base.abi_version || cur.same_surface(base) {
            continue;
        }

        for change in changed_identifiers(cur, base, policy) {
            diff.violations.push(Violation {
                contract: name.clone(),
                path: cur.path.clone(),
                current_version: Some(cur.abi_version),
                baseline_version: base.abi_version,
                suggested_version: base.abi_version.saturating_add(1),
                change,
            });
        }
    }

    diff.added = current
        .names()
        .filter(|name| !baseline.contains(name))
        .map(str::to_string)
        .collect();

    diff.violations.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    diff
}

fn changed_identifiers(
    cur: &ContractMetadata,
    base: &ContractMetadata,
    policy: &DiffPolicy,
) -> Vec<Change> {
    let mut changes = Vec::new();

    for (key, old) in &base.identifiers {
        match cur.identifiers.get(key) {
            Some(new) if new == old => {}
            Some(new) => changes.push(Change::Modified {
                old: old.clone(),
                new: new.clone(),
            }),
            None => match successor(cur, base, old) {
                Some(new) => changes.push(Change::Modified {
                    old: old.clone(),
                    new: new.clone(),
                }),
                None if policy.removals_need_bump() => {
                    changes.push(Change::Removed { old: old.clone() })
                }
                None => {}
            },
        }
    }

    changes
}

/// A current identifier of the same kind and name that is new since the
/// baseline. Only reachable under signature keying, where a changed
/// parameter list shows up as a different key.
fn successor<'a>(
    cur: &'a ContractMetadata,
    base: &ContractMetadata,
    old: &Identifier,
) -> Option<&'a Identifier> {
    cur.identifiers
        .iter()
        .find(|(key, id)| {
            id.name == old.name && id.kind == old.kind && !base.identifiers.contains_key(*key)
        })
        .map(|(_, id)| id)
}

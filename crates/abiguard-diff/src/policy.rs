use serde::{Deserialize, Serialize};

/// How removals are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemovalPolicy {
    /// Removing an identifier or a whole contract requires a version bump.
    #[default]
    RequireBump,
    /// Pure removals never produce violations.
    Exempt,
}

/// Comparison policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffPolicy {
    pub removal: RemovalPolicy,
}

impl DiffPolicy {
    /// A policy that lets removals through without a bump.
    pub fn removal_exempt() -> Self {
        Self {
            removal: RemovalPolicy::Exempt,
        }
    }

    pub fn removals_need_bump(&self) -> bool {
        self.removal == RemovalPolicy::RequireBump
    }
}

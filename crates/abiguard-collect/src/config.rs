use serde::{Deserialize, Serialize};

use crate::selector::{BaselineRef, StateSelector};

/// How the baseline source state is materialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineStrategy {
    /// Check the baseline out into a temporary `git worktree`. The
    /// repository's own checkout is never touched.
    #[default]
    Worktree,
    /// Check the baseline out in place, then switch back to the original ref.
    Checkout,
}

/// The baseline to compare against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    /// Remote to fetch the baseline from. Empty means no fetch.
    pub remote: String,
    /// Baseline branch or ref.
    pub reference: String,
    pub strategy: BaselineStrategy,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            remote: "origin".into(),
            reference: "staging".into(),
            strategy: BaselineStrategy::Worktree,
        }
    }
}

impl BaselineConfig {
    pub fn baseline_ref(&self) -> BaselineRef {
        let remote = (!self.remote.is_empty()).then(|| self.remote.clone());
        BaselineRef::new(remote, self.reference.clone())
    }

    /// The selector naming this baseline.
    pub fn selector(&self) -> StateSelector {
        StateSelector::Baseline(self.baseline_ref())
    }
}

/// Paths or names of the external tools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub git: String,
    pub forge: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            git: "git".into(),
            forge: "forge".into(),
        }
    }
}

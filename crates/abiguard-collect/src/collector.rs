//! Orchestration of one comparison run's snapshot collection.

use std::path::{Path, PathBuf};

use abiguard_extract::AbiExtractor;
use abiguard_types::{Snapshot, SnapshotPair};
use tracing::info;

use crate::build::BuildCollaborator;
use crate::config::{BaselineConfig, BaselineStrategy};
use crate::error::{CollectError, CollectResult};
use crate::selector::{BaselineRef, StateSelector};
use crate::vcs::Vcs;

/// Produces snapshots of explicitly selected source states.
///
/// The working tree is compiled and extracted in place. The baseline is
/// materialized according to the configured [`BaselineStrategy`]; in every
/// case the repository is returned to its original state before the result
/// is reported, whether extraction succeeded or not.
pub struct SnapshotCollector {
    root: PathBuf,
    vcs: Box<dyn Vcs>,
    build: Box<dyn BuildCollaborator>,
    extractor: AbiExtractor,
    baseline: BaselineConfig,
}

impl std::fmt::Debug for SnapshotCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCollector")
            .field("root", &self.root)
            .field("extractor", &self.extractor)
            .field("baseline", &self.baseline)
            .finish_non_exhaustive()
    }
}

impl SnapshotCollector {
    pub fn new(
        root: impl Into<PathBuf>,
        vcs: Box<dyn Vcs>,
        build: Box<dyn BuildCollaborator>,
        extractor: AbiExtractor,
        baseline: BaselineConfig,
    ) -> Self {
        Self {
            root: root.into(),
            vcs,
            build,
            extractor,
            baseline,
        }
    }

    /// Collect the working tree and the configured baseline.
    ///
    /// Fails with [`CollectError::DirtyWorkingTree`] before building anything
    /// if the working tree has uncommitted changes.
    pub fn collect_pair(&self) -> CollectResult<SnapshotPair> {
        if !self.vcs.is_clean()? {
            return Err(CollectError::DirtyWorkingTree);
        }

        let current = self.collect(&StateSelector::WorkingTree)?;
        let baseline = self.collect(&self.baseline.selector())?;
        Ok(SnapshotPair { current, baseline })
    }

    /// Collect the snapshot of one source state.
    pub fn collect(&self, selector: &StateSelector) -> CollectResult<Snapshot> {
        info!("collecting {selector}");
        match selector {
            StateSelector::WorkingTree => self.compile_and_extract(&self.root),
            StateSelector::Baseline(baseline) => match self.baseline.strategy {
                BaselineStrategy::Worktree => self.collect_in_worktree(baseline),
                BaselineStrategy::Checkout => self.collect_by_checkout(baseline),
            },
        }
    }

    fn compile_and_extract(&self, root: &Path) -> CollectResult<Snapshot> {
        info!("compiling contracts in {}", root.display());
        self.build.clean(root)?;
        self.build.compile(root)?;

        info!("parsing ABIs");
        let snapshot = self.extractor.extract(root)?;
        info!(contracts = snapshot.len(), "snapshot collected");
        Ok(snapshot)
    }

    fn fetch(&self, baseline: &BaselineRef) -> CollectResult<()> {
        if let Some(remote) = &baseline.remote {
            info!("fetching {} from {remote}", baseline.reference);
            self.vcs.fetch(remote, &baseline.reference)?;
        }
        Ok(())
    }

    fn collect_in_worktree(&self, baseline: &BaselineRef) -> CollectResult<Snapshot> {
        self.fetch(baseline)?;

        let scratch = tempfile::Builder::new()
            .prefix("abiguard-baseline-")
            .tempdir()
            .map_err(CollectError::Scratch)?;
        let tree = scratch.path().join("tree");

        self.vcs.add_worktree(&baseline.revision(), &tree)?;
        let result = self
            .vcs
            .update_submodules(&tree)
            .and_then(|()| self.compile_and_extract(&tree));
        let removed = self.vcs.remove_worktree(&tree);

        let snapshot = result?;
        removed?;
        Ok(snapshot)
    }

    fn collect_by_checkout(&self, baseline: &BaselineRef) -> CollectResult<Snapshot> {
        let original = self.vcs.current_ref()?;
        self.fetch(baseline)?;
        let revision = baseline.revision();
        self.vcs.checkout(&revision)?;

        let result = self.vcs.current_ref().and_then(|now| {
            if now == original {
                return Err(CollectError::CheckoutDidNotSwitch {
                    reference: revision.clone(),
                    current: now,
                });
            }
            self.compile_and_extract(&self.root)
        });

        info!("switching back to {original}");
        let restored = self
            .vcs
            .checkout(&original)
            .and_then(|()| self.build.clean(&self.root));

        let snapshot = result?;
        restored?;
        Ok(snapshot)
    }
}

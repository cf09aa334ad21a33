//! The [`Vcs`] trait and its git implementation.

use std::path::{Path, PathBuf};

use crate::error::CollectResult;
use crate::process::run_tool;

/// Version-control operations needed to materialize source states.
pub trait Vcs {
    /// Returns `true` if there are no uncommitted or untracked changes.
    fn is_clean(&self) -> CollectResult<bool>;

    /// The current branch name, or the commit when HEAD is detached.
    fn current_ref(&self) -> CollectResult<String>;

    /// Fetch `reference` from `remote`.
    fn fetch(&self, remote: &str, reference: &str) -> CollectResult<()>;

    /// Switch the repository checkout to `reference`.
    fn checkout(&self, reference: &str) -> CollectResult<()>;

    /// Materialize `revision` in a new detached worktree at `dest`.
    fn add_worktree(&self, revision: &str, dest: &Path) -> CollectResult<()>;

    /// Remove a worktree created by [`add_worktree`](Self::add_worktree).
    fn remove_worktree(&self, dest: &Path) -> CollectResult<()>;

    /// Initialize and update all submodules, recursively, of the checkout
    /// at `tree`. A fresh worktree has none of them populated.
    fn update_submodules(&self, tree: &Path) -> CollectResult<()>;
}

/// [`Vcs`] backed by the `git` command line.
#[derive(Clone, Debug)]
pub struct GitVcs {
    program: String,
    repo: PathBuf,
}

impl GitVcs {
    pub fn new(program: impl Into<String>, repo: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            repo: repo.into(),
        }
    }

    fn git<const N: usize>(&self, args: [&str; N]) -> CollectResult<String> {
        Ok(run_tool(&self.program, &self.repo, args)?)
    }
}

impl Vcs for GitVcs {
    fn is_clean(&self) -> CollectResult<bool> {
        let status = self.git(["status", "--porcelain"])?;
        Ok(status.trim().is_empty())
    }

    fn current_ref(&self) -> CollectResult<String> {
        let branch = self.git(["branch", "--show-current"])?;
        let branch = branch.trim();
        if !branch.is_empty() {
            return Ok(branch.to_string());
        }
        Ok(self.git(["rev-parse", "HEAD"])?.trim().to_string())
    }

    fn fetch(&self, remote: &str, reference: &str) -> CollectResult<()> {
        self.git(["fetch", remote, reference])?;
        Ok(())
    }

    fn checkout(&self, reference: &str) -> CollectResult<()> {
        self.git(["checkout", reference])?;
        Ok(())
    }

    fn add_worktree(&self, revision: &str, dest: &Path) -> CollectResult<()> {
        let dest = dest.to_string_lossy().into_owned();
        self.git(["worktree", "add", "--detach", dest.as_str(), revision])?;
        Ok(())
    }

    fn remove_worktree(&self, dest: &Path) -> CollectResult<()> {
        let dest = dest.to_string_lossy().into_owned();
        self.git(["worktree", "remove", "--force", dest.as_str()])?;
        Ok(())
    }

    fn update_submodules(&self, tree: &Path) -> CollectResult<()> {
        run_tool(
            &self.program,
            tree,
            ["submodule", "update", "--init", "--recursive"],
        )?;
        Ok(())
    }
}

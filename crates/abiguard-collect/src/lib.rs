//! Snapshot collection for abiguard.
//!
//! Produces the current and baseline [`Snapshot`](abiguard_types::Snapshot)s
//! of a repository. The source state is always named explicitly with a
//! [`StateSelector`]; the baseline is materialized either in a temporary git
//! worktree or by checking it out in place and switching back afterwards.
//!
//! # Modules
//!
//! - [`collector`] -- [`SnapshotCollector`], the orchestration of one run
//! - [`selector`] -- [`StateSelector`] and [`BaselineRef`]
//! - [`config`] -- Baseline and toolchain configuration
//! - [`vcs`] -- The [`Vcs`] trait and the git-backed [`GitVcs`]
//! - [`build`] -- The [`BuildCollaborator`] trait and the [`Forge`] toolchain
//! - [`error`] -- Error types for collection

pub mod build;
pub mod collector;
pub mod config;
pub mod error;
mod process;
pub mod selector;
pub mod vcs;

pub use build::{BuildCollaborator, Forge};
pub use collector::SnapshotCollector;
pub use config::{BaselineConfig, BaselineStrategy, ToolchainConfig};
pub use error::{CollectError, CollectResult, ToolError};
pub use selector::{BaselineRef, StateSelector};
pub use vcs::{GitVcs, Vcs};

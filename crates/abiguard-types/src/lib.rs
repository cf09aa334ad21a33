//! Foundation types for abiguard.
//!
//! This crate provides the data model shared by the extractor, the diff
//! engine, and the collector. Every other abiguard crate depends on
//! `abiguard-types`.
//!
//! # Key Types
//!
//! - [`ContractMetadata`] -- Declared ABI version and external surface of one contract
//! - [`Identifier`] -- A single function or event row from the ABI inspector
//! - [`EntryKind`] -- `function` or `event`
//! - [`IdentifierKeying`] -- How identifiers are keyed inside a contract
//! - [`Snapshot`] -- All tracked contracts of one source state, keyed by name
//! - [`SnapshotPair`] -- The current and baseline snapshots of one run

pub mod contract;
pub mod error;
pub mod identifier;
pub mod snapshot;

pub use contract::ContractMetadata;
pub use error::TypeError;
pub use identifier::{EntryKind, Identifier, IdentifierKeying};
pub use snapshot::{Snapshot, SnapshotPair};

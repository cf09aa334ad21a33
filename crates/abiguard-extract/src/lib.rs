//! ABI extraction for abiguard.
//!
//! Walks a contracts tree, finds every source file declaring the ABI version
//! marker, and asks an [`AbiInspector`] for the contract's external surface.
//! The result is a [`Snapshot`](abiguard_types::Snapshot) keyed by contract
//! name.
//!
//! # Key Types
//!
//! - [`AbiExtractor`] -- Builds a snapshot from one source root
//! - [`ExtractConfig`] -- Contracts directory, file extension, version prefix, keying
//! - [`AbiInspector`] -- Capability returning raw inspector rows for a contract
//! - [`StaticInspector`] -- In-memory inspector for tests and dry runs

pub mod config;
pub mod error;
pub mod extractor;
pub mod inspector;
pub mod row;
pub mod version;

pub use config::ExtractConfig;
pub use error::{ExtractError, ExtractResult};
pub use extractor::AbiExtractor;
pub use inspector::{AbiInspector, StaticInspector};
pub use row::{parse_row, parse_rows};
pub use version::scan_version;

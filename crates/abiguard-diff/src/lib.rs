//! Diff engine for abiguard.
//!
//! Compares the current and baseline snapshots contract by contract and
//! reports every external surface change that is not accompanied by an
//! increase of the contract's ABI version.
//!
//! # Key Types
//!
//! - [`compare`] -- The comparison entry point
//! - [`AbiDiff`] -- Sorted violations plus compared/added contract names
//! - [`Violation`] / [`Change`] -- One offending change and its detail
//! - [`DiffPolicy`] / [`RemovalPolicy`] -- Whether removals need a bump

pub mod engine;
pub mod policy;
pub mod violation;

pub use engine::{compare, AbiDiff};
pub use policy::{DiffPolicy, RemovalPolicy};
pub use violation::{Change, Violation};

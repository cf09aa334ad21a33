//! The [`AbiInspector`] capability and an in-memory implementation.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ExtractResult;

/// Produces the raw ABI table rows for one contract.
///
/// `root` is the source root the contract lives under and `contract` is the
/// contract source path relative to it. Implementations return every output
/// line; filtering and parsing happen in the extractor.
pub trait AbiInspector {
    fn inspect(&self, root: &Path, contract: &Path) -> ExtractResult<Vec<String>>;
}

impl<T: AbiInspector + ?Sized> AbiInspector for &T {
    fn inspect(&self, root: &Path, contract: &Path) -> ExtractResult<Vec<String>> {
        (**self).inspect(root, contract)
    }
}

/// An inspector that serves canned rows keyed by contract name (file stem).
///
/// Contracts without registered rows have an empty surface.
#[derive(Clone, Debug, Default)]
pub struct StaticInspector {
    rows: BTreeMap<String, Vec<String>>,
}

impl StaticInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rows returned for `contract`, replacing earlier ones.
    pub fn with_rows<I, S>(mut self, contract: &str, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .insert(contract.to_string(), rows.into_iter().map(Into::into).collect());
        self
    }
}

impl AbiInspector for StaticInspector {
    fn inspect(&self, _root: &Path, contract: &Path) -> ExtractResult<Vec<String>> {
        let name = contract
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.rows.get(&name).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_rows_by_stem() {
        let inspector = StaticInspector::new()
            .with_rows("Vault", ["| function | pause() | 0x8456cb59 |"]);
        let rows = inspector
            .inspect(Path::new("."), Path::new("contracts/core/Vault.sol"))
            .unwrap();
        assert_eq!(rows, vec!["| function | pause() | 0x8456cb59 |"]);
    }

    #[test]
    fn unknown_contract_has_no_rows() {
        let inspector = StaticInspector::new();
        let rows = inspector
            .inspect(Path::new("."), Path::new("contracts/Other.sol"))
            .unwrap();
        assert!(rows.is_empty());
    }
}

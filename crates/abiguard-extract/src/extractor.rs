//! Snapshot extraction from a source root.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use abiguard_types::{ContractMetadata, Snapshot, TypeError};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::ExtractConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::inspector::AbiInspector;
use crate::row::parse_rows;
use crate::version::scan_version;

/// Builds a [`Snapshot`] of every tracked contract under a source root.
///
/// A contract is tracked when its source declares the version marker. The
/// contract name is the file stem; names must be unique across the tree.
pub struct AbiExtractor {
    config: ExtractConfig,
    inspector: Arc<dyn AbiInspector>,
}

impl std::fmt::Debug for AbiExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbiExtractor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AbiExtractor {
    pub fn new(config: ExtractConfig, inspector: Arc<dyn AbiInspector>) -> Self {
        Self { config, inspector }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract all tracked contracts under `root`.
    ///
    /// A missing contracts directory yields an empty snapshot. Any unreadable
    /// file, invalid version literal, duplicate name, inspector failure, or
    /// malformed row aborts the pass.
    pub fn extract(&self, root: &Path) -> ExtractResult<Snapshot> {
        let contracts_dir = root.join(&self.config.contracts_dir);
        let mut snapshot = Snapshot::new();

        if !contracts_dir.is_dir() {
            warn!(
                "contracts directory does not exist: {}",
                contracts_dir.display()
            );
            return Ok(snapshot);
        }

        for entry in WalkDir::new(&contracts_dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !self.is_source(entry.path()) {
                continue;
            }

            let full_path = entry.path();
            let source = fs::read_to_string(full_path).map_err(|source| ExtractError::Io {
                path: full_path.to_path_buf(),
                source,
            })?;
            let rel_path = full_path.strip_prefix(root).unwrap_or(full_path);

            let Some(abi_version) =
                scan_version(rel_path, &source, &self.config.version_prefix)?
            else {
                continue;
            };

            let name = contract_name(rel_path);
            if let Some(existing) = snapshot.get(&name) {
                return Err(TypeError::DuplicateContract {
                    name,
                    first: existing.path.clone(),
                    second: rel_path.to_path_buf(),
                }
                .into());
            }

            let rows = self.inspector.inspect(root, rel_path)?;
            let mut metadata = ContractMetadata::new(rel_path, abi_version);
            for identifier in parse_rows(&name, &rows)? {
                metadata.insert(identifier, self.config.keying);
            }

            debug!(
                contract = %name,
                abi_version,
                identifiers = metadata.identifiers.len(),
                "extracted contract"
            );
            snapshot.insert(name, metadata)?;
        }

        Ok(snapshot)
    }

    fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e == self.config.source_extension.as_str())
            .unwrap_or(false)
    }
}

fn contract_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

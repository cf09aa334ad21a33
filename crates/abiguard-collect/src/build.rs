//! The [`BuildCollaborator`] trait and the forge toolchain.

use std::ffi::OsStr;
use std::path::Path;

use abiguard_extract::{AbiInspector, ExtractError, ExtractResult};

use crate::error::CollectResult;
use crate::process::run_tool;

/// Compiles the contracts of a source root so they can be inspected.
pub trait BuildCollaborator {
    /// Remove build artifacts under `root`.
    fn clean(&self, root: &Path) -> CollectResult<()>;

    /// Compile every contract under `root`.
    fn compile(&self, root: &Path) -> CollectResult<()>;
}

/// The Foundry `forge` toolchain: builds contracts and prints their ABI
/// tables with `forge inspect <contract> abi`.
#[derive(Clone, Debug)]
pub struct Forge {
    program: String,
}

impl Forge {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Forge {
    fn default() -> Self {
        Self::new("forge")
    }
}

impl BuildCollaborator for Forge {
    fn clean(&self, root: &Path) -> CollectResult<()> {
        run_tool(&self.program, root, ["clean"])?;
        Ok(())
    }

    fn compile(&self, root: &Path) -> CollectResult<()> {
        run_tool(&self.program, root, ["build"])?;
        Ok(())
    }
}

impl AbiInspector for Forge {
    fn inspect(&self, root: &Path, contract: &Path) -> ExtractResult<Vec<String>> {
        let stdout = run_tool(
            &self.program,
            root,
            [OsStr::new("inspect"), contract.as_os_str(), OsStr::new("abi")],
        )
        .map_err(|e| ExtractError::Inspector {
            contract: contract.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(stdout.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectError;

    #[test]
    fn inspect_failure_names_contract() {
        let forge = Forge::new("abiguard-test-no-such-forge");
        let err = forge
            .inspect(Path::new("."), Path::new("contracts/Vault.sol"))
            .unwrap_err();
        match err {
            ExtractError::Inspector { contract, reason } => {
                assert_eq!(contract, "contracts/Vault.sol");
                assert!(reason.contains("abiguard-test-no-such-forge inspect contracts/Vault.sol abi"));
            }
            other => panic!("expected Inspector error, got {:?}", other),
        }
    }

    #[test]
    fn compile_failure_is_tool_error() {
        let forge = Forge::new("abiguard-test-no-such-forge");
        assert!(matches!(
            forge.compile(Path::new(".")),
            Err(CollectError::Tool(_))
        ));
    }
}

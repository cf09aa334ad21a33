use std::path::PathBuf;

use abiguard_types::IdentifierKeying;
use serde::{Deserialize, Serialize};

/// Where to look for contracts and how to recognize tracked ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Contracts directory, relative to the source root.
    pub contracts_dir: PathBuf,
    /// Source file extension, without the dot.
    pub source_extension: String,
    /// Line prefix declaring the ABI version; the integer follows it.
    pub version_prefix: String,
    /// How identifiers are keyed within a contract.
    pub keying: IdentifierKeying,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            contracts_dir: PathBuf::from("contracts"),
            source_extension: "sol".into(),
            version_prefix: "uint256 public constant ABI_VERSION =".into(),
            keying: IdentifierKeying::Signature,
        }
    }
}

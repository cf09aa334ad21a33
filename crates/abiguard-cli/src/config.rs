use std::fs;
use std::path::{Path, PathBuf};

use abiguard_collect::{BaselineConfig, ToolchainConfig};
use abiguard_diff::{DiffPolicy, RemovalPolicy};
use abiguard_extract::ExtractConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Name of the config file looked up in the repository root.
pub const CONFIG_FILE: &str = "abiguard.toml";

/// Everything one check run needs, as read from `abiguard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub extract: ExtractConfig,
    pub diff: DiffPolicy,
    pub baseline: BaselineConfig,
    pub toolchain: ToolchainConfig,
}

impl CheckConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load the config for a run: the explicit `--config` file if given
    /// (which must exist), else `<repo>/abiguard.toml` if present, else
    /// defaults. Command-line overrides are applied last.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => {
                let default_path: PathBuf = cli.repo.join(CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(reference) = &cli.baseline {
            self.baseline.reference = reference.clone();
        }
        if let Some(remote) = &cli.remote {
            self.baseline.remote = remote.clone();
        }
        if let Some(strategy) = cli.strategy {
            self.baseline.strategy = strategy.into();
        }
        if cli.allow_removals {
            self.diff.removal = RemovalPolicy::Exempt;
        }
    }
}

#[cfg(test)]
mod tests {
    use abiguard_collect::BaselineStrategy;
    use abiguard_types::IdentifierKeying;
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["abiguard"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let repo = dir.path().to_str().unwrap();
        let config = CheckConfig::resolve(&cli(&["--repo", repo])).unwrap();
        assert_eq!(config, CheckConfig::default());
        assert_eq!(config.baseline.reference, "staging");
        assert_eq!(config.diff.removal, RemovalPolicy::RequireBump);
    }

    #[test]
    fn repo_config_file_is_picked_up() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[extract]
contracts_dir = "src"
keying = "name"

[diff]
removal = "exempt"

[baseline]
reference = "main"
strategy = "checkout"

[toolchain]
forge = "/opt/foundry/bin/forge"
"#,
        )
        .unwrap();

        let repo = dir.path().to_str().unwrap();
        let config = CheckConfig::resolve(&cli(&["--repo", repo])).unwrap();
        assert_eq!(config.extract.contracts_dir, PathBuf::from("src"));
        assert_eq!(config.extract.keying, IdentifierKeying::Name);
        assert_eq!(config.extract.source_extension, "sol");
        assert_eq!(config.diff.removal, RemovalPolicy::Exempt);
        assert_eq!(config.baseline.reference, "main");
        assert_eq!(config.baseline.remote, "origin");
        assert_eq!(config.baseline.strategy, BaselineStrategy::Checkout);
        assert_eq!(config.toolchain.forge, "/opt/foundry/bin/forge");
        assert_eq!(config.toolchain.git, "git");
    }

    #[test]
    fn flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ci.toml");
        fs::write(&path, "[baseline]\nreference = \"main\"\nremote = \"upstream\"\n").unwrap();

        let config = CheckConfig::resolve(&cli(&[
            "--config",
            path.to_str().unwrap(),
            "--baseline",
            "release",
            "--remote",
            "",
            "--strategy",
            "checkout",
            "--allow-removals",
        ]))
        .unwrap();
        assert_eq!(config.baseline.reference, "release");
        assert_eq!(config.baseline.remote, "");
        assert_eq!(config.baseline.strategy, BaselineStrategy::Checkout);
        assert_eq!(config.diff.removal, RemovalPolicy::Exempt);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = CheckConfig::resolve(&cli(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[diff]\nremoval = \"sometimes\"\n").unwrap();
        let repo = dir.path().to_str().unwrap();
        let err = CheckConfig::resolve(&cli(&["--repo", repo])).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }
}

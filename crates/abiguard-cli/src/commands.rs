use std::sync::Arc;

use abiguard_collect::{Forge, GitVcs, SnapshotCollector};
use abiguard_diff::compare;
use abiguard_extract::AbiExtractor;
use anyhow::Context;

use crate::cli::{Cli, OutputFormat};
use crate::config::CheckConfig;
use crate::report;

/// Exit status when violations were found.
pub const EXIT_VIOLATIONS: u8 = 1;
/// Exit status for any fatal error.
pub const EXIT_FATAL: u8 = 2;

/// Result of a completed check run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Violations,
}

impl Outcome {
    pub fn status(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::Violations => EXIT_VIOLATIONS,
        }
    }
}

/// Process exit status for the result of [`run`]. Any error is fatal.
pub fn exit_status(result: &anyhow::Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.status(),
        Err(_) => EXIT_FATAL,
    }
}

/// Collect both snapshots, compare them, and print the report to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = CheckConfig::resolve(cli)?;

    let forge = Forge::new(&config.toolchain.forge);
    let extractor = AbiExtractor::new(config.extract.clone(), Arc::new(forge.clone()));
    let collector = SnapshotCollector::new(
        &cli.repo,
        Box::new(GitVcs::new(&config.toolchain.git, &cli.repo)),
        Box::new(forge),
        extractor,
        config.baseline.clone(),
    );

    let pair = collector
        .collect_pair()
        .context("failed to collect contract snapshots")?;
    let diff = compare(&pair.current, &pair.baseline, &config.diff);

    let baseline = config.baseline.baseline_ref().revision();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => report::render_text(&mut out, &diff, &baseline)?,
        OutputFormat::Json => report::render_json(&mut out, &diff, &baseline)?,
    }

    Ok(if diff.is_clean() {
        Outcome::Clean
    } else {
        Outcome::Violations
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE;

    fn run_in(repo: &TempDir, extra: &[&str]) -> anyhow::Result<Outcome> {
        let mut argv = vec!["abiguard", "--repo", repo.path().to_str().unwrap()];
        argv.extend_from_slice(extra);
        run(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(exit_status(&Ok(Outcome::Clean)), 0);
        assert_eq!(exit_status(&Ok(Outcome::Violations)), EXIT_VIOLATIONS);
        assert_eq!(exit_status(&Err(anyhow::anyhow!("boom"))), EXIT_FATAL);
        assert_ne!(EXIT_VIOLATIONS, EXIT_FATAL);
    }

    #[test]
    fn missing_git_is_fatal() {
        let repo = TempDir::new().unwrap();
        fs::write(
            repo.path().join(CONFIG_FILE),
            "[toolchain]\ngit = \"abiguard-test-no-such-git\"\n",
        )
        .unwrap();

        let result = run_in(&repo, &[]);
        assert_eq!(exit_status(&result), EXIT_FATAL);

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "failed to collect contract snapshots");
        assert!(format!("{err:#}").contains("abiguard-test-no-such-git status --porcelain"));
    }

    #[test]
    fn invalid_config_is_fatal() {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join(CONFIG_FILE), "[baseline]\nstrategy = \"stash\"\n").unwrap();

        let result = run_in(&repo, &["--format", "json"]);
        assert_eq!(exit_status(&result), EXIT_FATAL);
        assert!(result.unwrap_err().to_string().contains("invalid config"));
    }
}

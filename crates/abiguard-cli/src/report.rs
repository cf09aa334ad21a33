use std::io::Write;

use abiguard_diff::{AbiDiff, Change, Violation};
use colored::Colorize;
use serde::Serialize;

/// Print one block per violation followed by a summary line.
pub fn render_text(out: &mut impl Write, diff: &AbiDiff, baseline: &str) -> std::io::Result<()> {
    for violation in &diff.violations {
        render_violation(out, violation, baseline)?;
    }

    if diff.is_clean() {
        writeln!(
            out,
            "{} ABI check passed: {} contract(s) compared against {}, {} new",
            "✓".green().bold(),
            diff.compared.len(),
            baseline.yellow(),
            diff.added.len()
        )
    } else {
        writeln!(
            out,
            "{} {} ABI change(s) without a version bump in {} contract(s)",
            "✗".red().bold(),
            diff.len(),
            diff.violating_contracts().len()
        )
    }
}

fn render_violation(out: &mut impl Write, v: &Violation, baseline: &str) -> std::io::Result<()> {
    let file = v
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| v.contract.clone());

    match &v.change {
        Change::Modified { old, new } => {
            writeln!(
                out,
                "{} {} ({}): {} {} changed without an ABI_VERSION bump",
                "✗".red().bold(),
                v.contract.bold(),
                v.path.display(),
                old.kind,
                old.name.yellow()
            )?;
            writeln!(out, "    baseline: {old}")?;
            writeln!(out, "    current:  {new}")?;
        }
        Change::Removed { old } => {
            writeln!(
                out,
                "{} {} ({}): {} {} removed without an ABI_VERSION bump",
                "✗".red().bold(),
                v.contract.bold(),
                v.path.display(),
                old.kind,
                old.name.yellow()
            )?;
            writeln!(out, "    baseline: {old}")?;
            writeln!(out, "    current:  {}", "(removed)".dimmed())?;
        }
        Change::ContractRemoved { identifiers } => {
            writeln!(
                out,
                "{} {} ({}): contract with {} external identifier(s) is missing or no longer declares ABI_VERSION",
                "✗".red().bold(),
                v.contract.bold(),
                v.path.display(),
                identifiers
            )?;
            writeln!(
                out,
                "    suggestion: restore {file} or its ABI_VERSION declaration (baseline {baseline} has version {})",
                v.baseline_version
            )?;
            return Ok(());
        }
    }

    let current = v
        .current_version
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".into());
    writeln!(
        out,
        "    suggestion: bump {file}'s public constant ABI_VERSION to {} (currently {current})",
        v.suggested_version.to_string().green().bold()
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    baseline: &'a str,
    clean: bool,
    #[serde(flatten)]
    diff: &'a AbiDiff,
}

/// Print the diff as a single JSON document.
pub fn render_json(out: &mut impl Write, diff: &AbiDiff, baseline: &str) -> anyhow::Result<()> {
    let report = JsonReport {
        baseline,
        clean: diff.is_clean(),
        diff,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use abiguard_diff::{compare, DiffPolicy};
    use abiguard_types::{ContractMetadata, Identifier, IdentifierKeying, Snapshot};

    use super::*;

    fn vault(version: u64, ids: &[Identifier]) -> Snapshot {
        let mut meta = ContractMetadata::new("contracts/Vault.sol", version);
        for id in ids {
            meta.insert(id.clone(), IdentifierKeying::Signature);
        }
        let mut snap = Snapshot::new();
        snap.insert("Vault", meta).unwrap();
        snap
    }

    fn text(diff: &AbiDiff) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render_text(&mut buf, diff, "origin/staging").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn clean_summary() {
        let snap = vault(1, &[Identifier::function("deposit(uint256)", "0xb6b55f25")]);
        let diff = compare(&snap, &snap, &DiffPolicy::default());
        let out = text(&diff);
        assert_eq!(
            out,
            "✓ ABI check passed: 1 contract(s) compared against origin/staging, 0 new\n"
        );
    }

    #[test]
    fn modified_identifier_block() {
        let baseline = vault(1, &[Identifier::function("deposit(uint256)", "0xb6b55f25")]);
        let current = vault(1, &[Identifier::function("deposit(uint256,address)", "0x6e553f65")]);
        let diff = compare(&current, &baseline, &DiffPolicy::default());

        let out = text(&diff);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "✗ Vault (contracts/Vault.sol): function deposit changed without an ABI_VERSION bump",
                "    baseline: deposit(uint256) [0xb6b55f25]",
                "    current:  deposit(uint256,address) [0x6e553f65]",
                "    suggestion: bump Vault.sol's public constant ABI_VERSION to 2 (currently 1)",
                "✗ 1 ABI change(s) without a version bump in 1 contract(s)",
            ]
        );
    }

    #[test]
    fn removed_identifier_block() {
        let baseline = vault(
            3,
            &[
                Identifier::function("deposit(uint256)", "0xb6b55f25"),
                Identifier::event("Paused(address)", "0x62e78cea"),
            ],
        );
        let current = vault(3, &[Identifier::function("deposit(uint256)", "0xb6b55f25")]);
        let diff = compare(&current, &baseline, &DiffPolicy::default());

        let out = text(&diff);
        assert!(out.contains("event Paused removed without an ABI_VERSION bump"));
        assert!(out.contains("    current:  (removed)"));
        assert!(out.contains("ABI_VERSION to 4 (currently 3)"));
    }

    #[test]
    fn removed_contract_block() {
        let baseline = vault(2, &[Identifier::function("deposit(uint256)", "0xb6b55f25")]);
        let diff = compare(&Snapshot::new(), &baseline, &DiffPolicy::default());

        let out = text(&diff);
        assert!(out.contains("Vault (contracts/Vault.sol): contract with 1 external identifier(s)"));
        assert!(out.contains("restore Vault.sol or its ABI_VERSION declaration (baseline origin/staging has version 2)"));
    }

    #[test]
    fn json_report() {
        let baseline = vault(1, &[Identifier::function("deposit(uint256)", "0xb6b55f25")]);
        let current = vault(1, &[Identifier::function("deposit(uint256,address)", "0x6e553f65")]);
        let diff = compare(&current, &baseline, &DiffPolicy::default());

        let mut buf = Vec::new();
        render_json(&mut buf, &diff, "origin/staging").unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["baseline"], "origin/staging");
        assert_eq!(json["clean"], false);
        assert_eq!(json["compared"][0], "Vault");
        let v = &json["violations"][0];
        assert_eq!(v["contract"], "Vault");
        assert_eq!(v["path"], PathBuf::from("contracts/Vault.sol").to_str().unwrap());
        assert_eq!(v["suggested_version"], 2);
        assert_eq!(v["change"]["kind"], "modified");
        assert_eq!(v["change"]["new"]["declaration"], "deposit(uint256,address)");
    }
}

//! Version marker scanning.

use std::path::Path;

use crate::error::{ExtractError, ExtractResult};

/// Find the ABI version declared in a source file.
///
/// Lines are trimmed and matched against `prefix`. The first matching line
/// wins and later ones are ignored. The value is the text between the prefix
/// and the first `;`, so a comment may follow the statement. Returns
/// `Ok(None)` when no line matches, which marks the contract as untracked.
pub fn scan_version(path: &Path, source: &str, prefix: &str) -> ExtractResult<Option<u64>> {
    for (idx, line) in source.lines().enumerate() {
        let Some(rest) = line.trim().strip_prefix(prefix) else {
            continue;
        };

        let literal = rest.split(';').next().unwrap_or_default().trim();

        return literal
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ExtractError::InvalidVersion {
                path: path.to_path_buf(),
                line: idx + 1,
                literal: literal.to_string(),
            });
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "uint256 public constant ABI_VERSION =";

    fn scan(source: &str) -> ExtractResult<Option<u64>> {
        scan_version(Path::new("contracts/Vault.sol"), source, PREFIX)
    }

    #[test]
    fn finds_indented_declaration() {
        let src = "contract Vault {\n    uint256 public constant ABI_VERSION = 3;\n}\n";
        assert_eq!(scan(src).unwrap(), Some(3));
    }

    #[test]
    fn first_declaration_wins() {
        let src = "uint256 public constant ABI_VERSION = 1;\nuint256 public constant ABI_VERSION = 9;\n";
        assert_eq!(scan(src).unwrap(), Some(1));
    }

    #[test]
    fn missing_semicolon_accepted() {
        assert_eq!(scan("uint256 public constant ABI_VERSION = 12").unwrap(), Some(12));
    }

    #[test]
    fn trailing_comment_after_semicolon() {
        let src = "    uint256 public constant ABI_VERSION = 2; // bump on change\n";
        assert_eq!(scan(src).unwrap(), Some(2));
    }

    #[test]
    fn comment_without_semicolon_is_fatal() {
        assert!(matches!(
            scan("uint256 public constant ABI_VERSION = 2 // bump"),
            Err(ExtractError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn no_declaration_is_untracked() {
        let src = "contract Plain {\n    uint256 public constant OTHER = 1;\n}\n";
        assert_eq!(scan(src).unwrap(), None);
    }

    #[test]
    fn commented_declaration_ignored() {
        let src = "// uint256 public constant ABI_VERSION = 1;\n";
        assert_eq!(scan(src).unwrap(), None);
    }

    #[test]
    fn non_integer_is_fatal() {
        let src = "contract Vault {\n\n  uint256 public constant ABI_VERSION = V2;\n}";
        match scan(src) {
            Err(ExtractError::InvalidVersion { line, literal, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(literal, "V2");
            }
            other => panic!("expected InvalidVersion, got {:?}", other),
        }
    }

    #[test]
    fn negative_is_fatal() {
        assert!(matches!(
            scan("uint256 public constant ABI_VERSION = -1;"),
            Err(ExtractError::InvalidVersion { .. })
        ));
    }
}

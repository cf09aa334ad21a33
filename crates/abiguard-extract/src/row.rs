//! Parsing of ABI inspector rows.
//!
//! The inspector prints a table such as:
//!
//! ```text
//! | Type     | Signature                 | Selector   |
//! |----------+---------------------------+------------|
//! | function | deposit(uint256)          | 0xb6b55f25 |
//! | event    | Deposit(address,uint256)  | 0xe1fffcc4 |
//! ```
//!
//! Only `function` and `event` rows are kept. Everything else (headers,
//! separators, errors, constructors) is skipped.

use abiguard_types::{EntryKind, Identifier};

use crate::error::{ExtractError, ExtractResult};

/// Parse a single inspector row.
///
/// Returns `Ok(None)` for rows that do not describe a function or event, and
/// an error for function/event rows with an unexpected column layout.
pub fn parse_row(contract: &str, line: &str) -> ExtractResult<Option<Identifier>> {
    let Some(rest) = line.trim_start().strip_prefix('|') else {
        return Ok(None);
    };

    let mut columns = rest.splitn(3, '|');
    let kind = match columns.next().map(str::trim) {
        Some("function") => EntryKind::Function,
        Some("event") => EntryKind::Event,
        _ => return Ok(None),
    };

    let malformed = |reason| ExtractError::MalformedRow {
        contract: contract.to_string(),
        row: line.to_string(),
        reason,
    };

    let declaration = columns
        .next()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| malformed("missing declaration column"))?;

    let (name, _) = declaration
        .split_once('(')
        .ok_or_else(|| malformed("declaration has no parameter list"))?;
    if name.trim().is_empty() {
        return Err(malformed("declaration has no name"));
    }

    let signature = columns
        .next()
        .and_then(|c| c.split('|').next())
        .and_then(|c| c.split_whitespace().next())
        .ok_or_else(|| malformed("missing signature column"))?;

    Ok(Some(Identifier::new(kind, declaration, signature)))
}

/// Parse every row of one inspector run, in order.
pub fn parse_rows<S: AsRef<str>>(contract: &str, rows: &[S]) -> ExtractResult<Vec<Identifier>> {
    let mut identifiers = Vec::new();
    for row in rows {
        if let Some(id) = parse_row(contract, row.as_ref())? {
            identifiers.push(id);
        }
    }
    Ok(identifiers)
}

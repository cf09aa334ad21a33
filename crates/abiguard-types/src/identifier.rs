//! External ABI members: functions and events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The kind of an externally visible ABI member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Function,
    Event,
}

impl EntryKind {
    /// The lowercase label used by the ABI inspector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "function" => Ok(Self::Function),
            "event" => Ok(Self::Event),
            other => Err(TypeError::UnknownEntryKind(other.to_string())),
        }
    }
}

/// One function or event exposed by a contract.
///
/// `declaration` is the name with parameter types (`deposit(uint256)`);
/// `signature` is the inspector's signature column, typically the 4-byte
/// selector for functions and the topic hash for events.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub kind: EntryKind,
    pub name: String,
    pub declaration: String,
    pub signature: String,
}

impl Identifier {
    pub fn new(
        kind: EntryKind,
        declaration: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        let declaration = declaration.into();
        let name = declaration
            .split('(')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            kind,
            name,
            declaration,
            signature: signature.into(),
        }
    }

    /// Shorthand for a function identifier.
    pub fn function(declaration: impl Into<String>, signature: impl Into<String>) -> Self {
        Self::new(EntryKind::Function, declaration, signature)
    }

    /// Shorthand for an event identifier.
    pub fn event(declaration: impl Into<String>, signature: impl Into<String>) -> Self {
        Self::new(EntryKind::Event, declaration, signature)
    }

    /// The map key for this identifier under the given keying.
    pub fn key(&self, keying: IdentifierKeying) -> &str {
        match keying {
            IdentifierKeying::Name => &self.name,
            IdentifierKeying::Signature => &self.declaration,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.declaration, self.signature)
    }
}

/// How identifiers are keyed within one contract.
///
/// `Signature` keys on the full declaration so overloads stay distinct.
/// `Name` keys on the bare name and lets the last overload seen win.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKeying {
    Name,
    #[default]
    Signature,
}

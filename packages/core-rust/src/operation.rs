//! Operation names and their argument-count contracts.

use std::fmt;

/// Number of arguments an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgCount {
    Exactly(usize),
    /// At least `n`; arguments past the `n`th are ignored.
    AtLeast(usize),
}

impl ArgCount {
    #[must_use]
    pub fn accepts(self, len: usize) -> bool {
        match self {
            Self::Exactly(n) => len == n,
            Self::AtLeast(n) => len >= n,
        }
    }
}

impl fmt::Display for ArgCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// The registry's operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationName {
    /// `registerLand(name, dimension, locality, price, owner)`
    Register,
    /// `fetchLand(name)`
    Fetch,
    /// `transferLand(name, newOwner, ...)`
    Transfer,
}

impl OperationName {
    /// Resolves an invoked function name. Both the ledger names
    /// (`registerLand`, ...) and the short forms (`register`, ...) resolve.
    #[must_use]
    pub fn from_function(function: &str) -> Option<Self> {
        match function {
            "registerLand" | "register" => Some(Self::Register),
            "fetchLand" | "fetch" => Some(Self::Fetch),
            "transferLand" | "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }

    /// Canonical function name as deployed on the ledger.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Register => "registerLand",
            Self::Fetch => "fetchLand",
            Self::Transfer => "transferLand",
        }
    }

    #[must_use]
    pub fn arg_count(self) -> ArgCount {
        match self {
            Self::Register => ArgCount::Exactly(5),
            Self::Fetch => ArgCount::Exactly(1),
            Self::Transfer => ArgCount::AtLeast(2),
        }
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

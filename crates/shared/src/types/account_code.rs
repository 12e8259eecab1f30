//! Ledger account codes.
//!
//! The hierarchy above an account is never stored: it is derived from the
//! code itself by integer division. A code `cggaa` splits into class `c`
//! (`code / 1000`) and group `cgg` (`code / 100`).

use serde::{Deserialize, Serialize};

/// Identifier of a top-level account class (`code / 1000`).
pub type ClassId = u32;

/// Identifier of a mid-level account group (`code / 100`).
pub type GroupId = u32;

/// A ledger account code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCode(pub u32);

impl AccountCode {
    /// Smallest code following the four-digit convention.
    pub const MIN_CONVENTIONAL: u32 = 1000;
    /// Largest code following the four-digit convention.
    pub const MAX_CONVENTIONAL: u32 = 9999;

    /// Creates an account code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Returns the raw numeric code.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Class this account belongs to.
    #[must_use]
    pub const fn class_id(self) -> ClassId {
        self.0 / 1000
    }

    /// Group this account belongs to.
    #[must_use]
    pub const fn group_id(self) -> GroupId {
        self.0 / 100
    }

    /// Class a group belongs to.
    #[must_use]
    pub const fn class_of_group(group: GroupId) -> ClassId {
        group / 10
    }

    /// Whether the code follows the `class*1000 + group*100 + account`
    /// four-digit convention.
    #[must_use]
    pub const fn is_conventional(self) -> bool {
        self.0 >= Self::MIN_CONVENTIONAL && self.0 <= Self::MAX_CONVENTIONAL
    }
}

impl std::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

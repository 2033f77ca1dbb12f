// crates/shared-kernel/src/value_objects/revision.rs
use std::{fmt, num::NonZeroU64, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of leading commit-id characters kept in a [`ShortHash`].
pub const SHORT_HASH_LEN: usize = 7;

/// Number of commits reachable from the current head. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevisionCount(NonZeroU64);

impl RevisionCount {
    #[inline]
    pub const fn new(value: u64) -> Option<Self> {
        match NonZeroU64::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for RevisionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RevisionCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| DomainError::InvalidRevisionCount { value: s.to_string() })
    }
}

impl PartialEq<u64> for RevisionCount {
    fn eq(&self, other: &u64) -> bool {
        self.value() == *other
    }
}

/// Abbreviated commit identifier: at most [`SHORT_HASH_LEN`] characters, never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortHash(String);

impl ShortHash {
    /// Abbreviate a full commit identifier.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for an empty id or one
    /// that contains interior whitespace.
    pub fn from_commit_id(id: &str) -> Option<Self> {
        let id = id.trim();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(id.chars().take(SHORT_HASH_LEN).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ShortHash {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_commit_id(s).ok_or_else(|| DomainError::InvalidShortHash {
            value: s.to_string(),
            reason: "expected a non-empty token without whitespace".to_string(),
        })
    }
}

impl TryFrom<String> for ShortHash {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShortHash> for String {
    fn from(value: ShortHash) -> Self {
        value.0
    }
}

impl PartialEq<&str> for ShortHash {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

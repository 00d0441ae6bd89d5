//! Typed ID wrapper for directory records.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// A strongly-typed wrapper for user IDs.
///
/// IDs are assigned by the directory from a monotonic counter and are
/// never reused, even after the record they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// The first id handed out by an empty directory.
    pub const FIRST: Self = Self(1);

    /// Parses a user ID from a path segment.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.parse()?))
    }

    /// Returns the id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parsing() {
        assert_eq!(UserId::parse("42").unwrap(), UserId(42));
        assert_eq!("-3".parse::<UserId>().unwrap(), UserId(-3));
        assert!(UserId::parse("abc").is_err());
        assert!(UserId::parse("4.5").is_err());
        assert!(UserId::parse("").is_err());
    }

    #[test]
    fn test_user_id_sequence() {
        assert_eq!(UserId::default(), UserId::FIRST);
        assert_eq!(UserId(3).next(), UserId(4));
        assert!(UserId(3) < UserId(3).next());
    }

    #[test]
    fn test_user_id_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&UserId(7)).unwrap(), "7");
        assert_eq!(UserId(7).to_string(), "7");
    }
}

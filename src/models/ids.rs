//! Expense identifiers
//!
//! An expense id is the creation timestamp rendered as an RFC 3339 string
//! with millisecond precision (`2025-03-14T09:26:53.589Z`). Ids read from
//! storage are accepted verbatim, so older data with other id shapes still
//! loads.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a single expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create an id from a specific instant
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Create an id that does not collide with any id `taken` reports
    ///
    /// Starts at `at` and moves forward one millisecond at a time.
    pub fn unique_from(at: DateTime<Utc>, taken: impl Fn(&ExpenseId) -> bool) -> Self {
        let mut instant = at;
        loop {
            let candidate = Self::from_timestamp(instant);
            if !taken(&candidate) {
                return candidate;
            }
            instant += Duration::milliseconds(1);
        }
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

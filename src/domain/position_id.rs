//! Store-assigned integer identifier for positions.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique identifier for a position.
///
/// Ids are assigned by the store on insert, are always positive, and are
/// never reused after the position is deleted.
///
/// # Examples
///
/// ```
/// use orgtree::domain::PositionId;
///
/// let id: PositionId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// assert!("abc".parse::<PositionId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PositionId(i64);

impl PositionId {
    /// Creates an id from a raw value, rejecting zero and negative numbers.
    pub fn new(value: i64) -> Result<Self, ParsePositionIdError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(ParsePositionIdError {
                value: value.to_string(),
                reason: "id must be a positive integer".to_string(),
            })
        }
    }

    /// Returns the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PositionId({})", self.0)
    }
}

impl From<PositionId> for i64 {
    fn from(id: PositionId) -> Self {
        id.0
    }
}

impl TryFrom<i64> for PositionId {
    type Error = ParsePositionIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Error returned when parsing a malformed position id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionIdError {
    value: String,
    reason: String,
}

impl ParsePositionIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParsePositionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParsePositionIdError {}

impl FromStr for PositionId {
    type Err = ParsePositionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|e: std::num::ParseIntError| {
            ParsePositionIdError {
                value: s.to_string(),
                reason: e.to_string(),
            }
        })?;
        Self::new(value).map_err(|mut e| {
            e.value = s.to_string();
            e
        })
    }
}

impl ToSql for PositionId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for PositionId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = i64::column_result(value)?;
        Self::new(raw).map_err(|_| FromSqlError::OutOfRange(raw))
    }
}

//! Common types for the shared crate
//!
//! Identifier and timestamp types used by every model.

use serde::{Deserialize, Deserializer, Serialize};

/// Sale timestamp type (RFC 3339, UTC)
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Record identifier assigned by the remote store.
///
/// Backends emit either JSON strings (`"a1b2"`) or integers (`7`); both are
/// kept as text so `7` and `"7"` name the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Int(n) => Self(n.to_string()),
            Raw::Uint(n) => Self(n.to_string()),
        })
    }
}

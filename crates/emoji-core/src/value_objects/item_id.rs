//! Item ID - process-unique identifier for a generated emoji
//!
//! Backed by a random (v4) UUID. Serialized as the hyphenated string form
//! so persisted blobs stay readable by any JSON consumer.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a single gallery item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh, never-before-used ID
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, ItemIdParseError> {
        Uuid::parse_str(s.trim())
            .map(ItemId)
            .map_err(|_| ItemIdParseError::InvalidFormat(s.to_string()))
    }
}

/// Error when parsing an ItemId from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemIdParseError {
    #[error("invalid item id: {0:?}")]
    InvalidFormat(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::str::FromStr for ItemId {
    type Err = ItemIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::parse(s)
    }
}

//! Identifier types for event records
//!
//! Identifiers are opaque strings supplied by the event source. Records built
//! in code can mint fresh UUID-based identifiers instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an event record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wrap an identifier supplied by the event source
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a new random event ID
    pub fn generate() -> Self {
        Self(format!("EVT_{}", Uuid::new_v4().simple()))
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of the user or organization that created an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Wrap an owner identifier supplied by the event source
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a new random owner ID
    pub fn generate() -> Self {
        Self(format!("USER_{}", Uuid::new_v4().simple()))
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

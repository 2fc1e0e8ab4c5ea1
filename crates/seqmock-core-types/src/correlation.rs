//! Correlation types for request tracking
//!
//! Every HTTP request served by the mock gets a `RequestId` so that its
//! start and end log events can be tied together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Header a caller may set to supply its own request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Unique identifier for a single request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (e.g. a caller-supplied header)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Use the caller-supplied identifier when it is non-blank, otherwise mint one
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self(v.to_string()),
            _ => Self::new(),
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

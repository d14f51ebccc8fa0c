//! Shared types used across the dispatcher and the aggregator

use serde::{Deserialize, Serialize};

/// Type-safe wrapper for the 0-based dispatch index of a request
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RequestId(pub usize);

impl RequestId {
    /// Create a new RequestId
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    pub fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

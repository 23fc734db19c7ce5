//! Product identifier tokens.

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Process-wide sequence appended to generated ids so that two calls within
/// the same millisecond still produce distinct tokens.
static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Identifier of a catalog product.
///
/// Stored as an opaque string token. Seed products use short hand-assigned
/// tokens (`p1`, `p2`, ...); products created at runtime get a
/// timestamp-derived token from [`ProductId::generate`]. Cart lines hold the
/// id of the product they snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from an existing token.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh unique id.
    ///
    /// The token combines the current Unix timestamp in milliseconds with a
    /// process-wide sequence number, so rapid successive calls never collide.
    #[must_use]
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
        Self(format!("p{millis}-{seq}"))
    }

    /// Get the underlying token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

//! Cache Entry Module
//!
//! Defines the record held in the recency list, with absolute expiration.

use chrono::Utc;

// == Cache Entry ==
/// A single cached record.
///
/// `expires_at` is a Unix timestamp in seconds. `0` is a sentinel for
/// "never valid", not "never expires".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The key this entry is indexed under
    pub key: String,
    /// The stored value
    pub value: String,
    /// Expiration timestamp (Unix seconds), 0 = already expired
    pub expires_at: i64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry.
    pub fn new(key: String, value: String, expires_at: i64) -> Self {
        Self {
            key,
            value,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks expiration against an explicit clock reading.
    ///
    /// An entry stamped with exactly `now` is still fresh; it expires once
    /// the clock moves past it.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at == 0 || self.expires_at < now
    }

    /// Checks expiration against the system clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Returns the Unix timestamp `seconds` from now.
pub fn expires_in(seconds: i64) -> i64 {
    current_timestamp().saturating_add(seconds)
}

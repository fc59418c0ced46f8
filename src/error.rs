//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Cache operations never
//! fail; errors only come from construction, configuration, command parsing
//! and the message-passing front end.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity below zero was requested
    #[error("Invalid capacity: {0} (must be >= 0)")]
    InvalidCapacity(i64),

    /// An environment setting could not be used
    #[error("Invalid config {name}: {reason}")]
    InvalidConfig { name: String, reason: String },

    /// A command line could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// The cache task is no longer running
    #[error("Cache task has shut down")]
    ActorClosed,
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;

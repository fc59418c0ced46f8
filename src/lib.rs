//! Expiring LRU - An in-process key-value cache
//!
//! Bounded LRU eviction with per-entry absolute expiration, a pluggable key
//! index, and an optional message-passing front end.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use cache::{Cache, InMemoryStore, Store};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::{spawn_cache_actor, CacheHandle};

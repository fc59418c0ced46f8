//! Cache Module
//!
//! In-process key-value cache with LRU eviction and per-entry expiration.

mod engine;
mod entry;
mod lru;
mod store;


// Re-export public types
pub use engine::Cache;
pub use entry::{current_timestamp, expires_in, CacheEntry};
pub use lru::{EntryHandle, LruList};
pub use store::{InMemoryStore, Store};

//! Background Tasks Module
//!
//! Tasks that own cache state and serve it to async callers.
//!
//! # Tasks
//! - Cache actor: single owner of a `Cache`, serializing every operation
//!   through a channel

mod actor;

pub use actor::{spawn_cache_actor, CacheHandle};

//! Cache Store Module
//!
//! Key lookup index used by the cache engine. The store maps keys to opaque
//! handles into the engine's recency list and never owns entry data, so
//! alternate backings (sharded, persistent) can be dropped in behind the
//! [`Store`] trait.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

// == Store Trait ==
/// Key to handle index.
///
/// Each operation is atomic with respect to concurrent callers.
pub trait Store<H>: Send + Sync {
    /// Resolves a key to its handle.
    fn get(&self, key: &str) -> Option<H>;

    /// Inserts or replaces the handle for a key.
    fn set(&self, key: String, handle: H);

    /// Removes a key. No-op if absent.
    fn delete(&self, key: &str);
}

// == In-Memory Store ==
/// `HashMap` index guarded by a single reader/writer lock.
///
/// Reads share the lock, writes take it exclusively. Calls block until the
/// lock is available.
#[derive(Debug)]
pub struct InMemoryStore<H> {
    index: RwLock<HashMap<String, H>>,
}

impl<H> InMemoryStore<H> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            index: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of indexed keys.
    pub fn len(&self) -> usize {
        self.index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> Default for InMemoryStore<H> {
    fn default() -> Self {
        Self::new()
    }
}

// A poisoned lock still holds a consistent map: every write is a single
// insert or remove.
impl<H> Store<H> for InMemoryStore<H>
where
    H: Copy + Send + Sync,
{
    fn get(&self, key: &str) -> Option<H> {
        self.index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }

    fn set(&self, key: String, handle: H) {
        self.index
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, handle);
    }

    fn delete(&self, key: &str) {
        self.index
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_store_new() {
        let store = InMemoryStore::<usize>::new();
        assert!(store.is_empty());
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_store_set_and_get() {
        let store = InMemoryStore::new();
        store.set("key1".to_string(), 7usize);

        assert_eq!(store.get("key1"), Some(7));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_set_overwrites() {
        let store = InMemoryStore::new();
        store.set("key1".to_string(), 1usize);
        store.set("key1".to_string(), 2usize);

        assert_eq!(store.get("key1"), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_delete() {
        let store = InMemoryStore::new();
        store.set("key1".to_string(), 1usize);
        store.delete("key1");

        assert_eq!(store.get("key1"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let store = InMemoryStore::new();
        store.set("key1".to_string(), 1usize);
        store.delete("other");

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_concurrent_writers() {
        let store = Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..8usize)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..100usize {
                        store.set(format!("t{t}_k{i}"), i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 800);
        assert_eq!(store.get("t3_k99"), Some(99));
    }

    #[test]
    fn test_store_is_usable_as_trait_object() {
        let store: Box<dyn Store<usize>> = Box::new(InMemoryStore::new());
        store.set("key".to_string(), 3);
        assert_eq!(store.get("key"), Some(3));
    }
}

//! Cache Engine Module
//!
//! Combines the recency list with a pluggable key index and enforces
//! capacity and expiration.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::cache::entry::current_timestamp;
use crate::cache::{CacheEntry, EntryHandle, InMemoryStore, LruList, Store};
use crate::error::{CacheError, Result};

#[derive(Debug)]
struct Inner<S> {
    list: LruList,
    store: S,
}

// == Cache ==
/// Bounded LRU cache with per-entry expiration.
///
/// The recency list and the store are mutated together under one lock, so
/// every public operation is a single critical section and the cache can be
/// shared across threads behind an `Arc`.
///
/// Expiration is lazy: an expired entry is hidden from [`Cache::get`] but
/// keeps its slot until it is deleted, overwritten or evicted.
#[derive(Debug)]
pub struct Cache<S = InMemoryStore<EntryHandle>> {
    /// Maximum number of entries, 0 = unbounded
    capacity: usize,
    inner: Mutex<Inner<S>>,
}

impl Cache<InMemoryStore<EntryHandle>> {
    /// Creates a cache backed by an [`InMemoryStore`].
    pub fn in_memory(capacity: usize) -> Self {
        Self::new(capacity, InMemoryStore::new())
    }
}

impl<S: Store<EntryHandle>> Cache<S> {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries (0 = unbounded).
    pub fn new(capacity: usize, store: S) -> Self {
        Self {
            capacity,
            inner: Mutex::new(Inner {
                list: LruList::new(),
                store,
            }),
        }
    }

    /// Creates a cache from a signed capacity, rejecting negative values.
    pub fn with_capacity(capacity: i64, store: S) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| CacheError::InvalidCapacity(capacity))?;
        Ok(Self::new(capacity, store))
    }

    // No operation panics while holding the lock, so a poisoned guard still
    // sees a consistent list and store.
    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Set ==
    /// Inserts or overwrites `key`.
    ///
    /// An overwrite updates value and expiration in place and refreshes
    /// recency. A new key on a full cache evicts exactly one entry, the
    /// least recently used.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>, expires_at: i64) {
        let key = key.into();
        let value = value.into();

        let mut inner = self.lock();
        let Inner { list, store } = &mut *inner;

        if let Some(handle) = store.get(&key) {
            if let Some(entry) = list.get_mut(handle) {
                entry.value = value;
                entry.expires_at = expires_at;
                list.move_to_front(handle);
                return;
            }
        }

        if self.capacity != 0 && list.len() >= self.capacity {
            if let Some(evicted) = list.pop_back() {
                store.delete(&evicted.key);
                debug!("LRU eviction: removed key {}", evicted.key);
            }
        }

        let handle = list.push_front(CacheEntry::new(key.clone(), value, expires_at));
        store.set(key, handle);
    }

    // == Get ==
    /// Returns the value for `key` if present and not expired.
    ///
    /// A hit refreshes recency. Expired entries are reported as missing but
    /// are left in place.
    pub fn get(&self, key: &str) -> Option<String> {
        let now = current_timestamp();

        let mut inner = self.lock();
        let Inner { list, store } = &mut *inner;

        let handle = store.get(key)?;
        let entry = list.get(handle)?;
        if entry.is_expired_at(now) {
            return None;
        }

        let value = entry.value.clone();
        list.move_to_front(handle);
        Some(value)
    }

    // == Delete ==
    /// Removes `key`. No-op if absent.
    pub fn delete(&self, key: &str) {
        let mut inner = self.lock();
        let Inner { list, store } = &mut *inner;

        if let Some(handle) = store.get(key) {
            list.remove(handle);
            store.delete(key);
        }
    }

    // == Has ==
    /// Checks whether a slot exists for `key`, ignoring expiration.
    pub fn has(&self, key: &str) -> bool {
        self.lock().store.get(key).is_some()
    }

    // == Size ==
    /// Returns the configured capacity (0 = unbounded), not the occupancy.
    pub fn size(&self) -> usize {
        self.capacity
    }

    /// Returns the number of resident entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().list.is_empty()
    }

    /// Returns resident keys from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        self.lock().list.iter().map(|e| e.key.clone()).collect()
    }

    #[cfg(test)]
    pub(crate) fn with_store<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock().store)
    }
}

//! LRU List Module
//!
//! Recency-ordered doubly-linked list of cache entries.
//!
//! Nodes live in a `Vec` arena and link to each other by index, so the list
//! needs no unsafe code and hands out plain `Copy` handles. Freed slots go on
//! a free list and are reused by later inserts.

use crate::cache::CacheEntry;

// == Entry Handle ==
/// Opaque position of an entry inside an [`LruList`].
///
/// A handle stays valid until its entry is removed; after that its slot may
/// be reused by a different entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle(usize);

#[derive(Debug)]
struct Node {
    entry: CacheEntry,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU List ==
/// Doubly-linked recency list.
///
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug, Default)]
pub struct LruList {
    slots: Vec<Option<Node>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Vec<usize>,
    len: usize,
}

impl LruList {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Front ==
    /// Inserts an entry as the most recently used and returns its handle.
    pub fn push_front(&mut self, entry: CacheEntry) -> EntryHandle {
        let node = Node {
            entry,
            prev: None,
            next: None,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        EntryHandle(idx)
    }

    // == Move To Front ==
    /// Marks an entry as most recently used.
    ///
    /// Unknown handles are ignored.
    pub fn move_to_front(&mut self, handle: EntryHandle) {
        if self.head == Some(handle.0) {
            return;
        }
        if self.unlink(handle.0) {
            self.link_front(handle.0);
        }
    }

    // == Remove ==
    /// Removes an entry, returning it. Returns None for unknown handles.
    pub fn remove(&mut self, handle: EntryHandle) -> Option<CacheEntry> {
        if !self.unlink(handle.0) {
            return None;
        }
        let node = self.slots.get_mut(handle.0)?.take()?;
        self.free.push(handle.0);
        self.len -= 1;
        Some(node.entry)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    pub fn pop_back(&mut self) -> Option<CacheEntry> {
        let tail = self.tail?;
        self.remove(EntryHandle(tail))
    }

    /// Returns the least recently used entry without removing it.
    pub fn back(&self) -> Option<&CacheEntry> {
        self.tail.and_then(|idx| self.get(EntryHandle(idx)))
    }

    pub fn get(&self, handle: EntryHandle) -> Option<&CacheEntry> {
        self.slots
            .get(handle.0)
            .and_then(Option::as_ref)
            .map(|node| &node.entry)
    }

    pub fn get_mut(&mut self, handle: EntryHandle) -> Option<&mut CacheEntry> {
        self.node_mut(handle.0).map(|node| &mut node.entry)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    /// Detaches a live node from its neighbours. Returns false if the slot is empty.
    fn unlink(&mut self, idx: usize) -> bool {
        let (prev, next) = match self.slots.get(idx).and_then(Option::as_ref) {
            Some(node) => (node.prev, node.next),
            None => return false,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = None;
        }
        true
    }

    /// Attaches a detached node at the head.
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;

        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
    }
}

// == Iterator ==
/// Front-to-back iterator over an [`LruList`].
pub struct Iter<'a> {
    list: &'a LruList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CacheEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.slots.get(idx)?.as_ref()?;
        self.cursor = node.next;
        Some(&node.entry)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str) -> CacheEntry {
        CacheEntry::new(key.to_string(), format!("v_{key}"), 0)
    }

    fn keys(list: &LruList) -> Vec<&str> {
        list.iter().map(|e| e.key.as_str()).collect()
    }

    /// Walks tail to head through `prev` links.
    fn keys_reversed(list: &LruList) -> Vec<&str> {
        let mut out = Vec::new();
        let mut cursor = list.tail;
        while let Some(idx) = cursor {
            let node = list.slots[idx].as_ref().unwrap();
            out.push(node.entry.key.as_str());
            cursor = node.prev;
        }
        out
    }

    #[test]
    fn test_lru_new() {
        let list = LruList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.back().is_none());
    }

    #[test]
    fn test_push_front_orders_by_recency() {
        let mut list = LruList::new();
        list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.push_front(entry("c"));

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), vec!["c", "b", "a"]);
        assert_eq!(list.back().unwrap().key, "a");
    }

    #[test]
    fn test_move_to_front_keeps_both_directions_linked() {
        let mut list = LruList::new();
        let a = list.push_front(entry("a"));
        let b = list.push_front(entry("b"));
        list.push_front(entry("c"));

        list.move_to_front(a);
        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        assert_eq!(keys_reversed(&list), vec!["b", "c", "a"]);

        list.move_to_front(b);
        list.move_to_front(a);
        assert_eq!(keys(&list), vec!["a", "b", "c"]);
        assert_eq!(keys_reversed(&list), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_move_head_is_noop() {
        let mut list = LruList::new();
        list.push_front(entry("a"));
        let b = list.push_front(entry("b"));

        list.move_to_front(b);
        assert_eq!(keys(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_pop_back_evicts_oldest() {
        let mut list = LruList::new();
        list.push_front(entry("a"));
        list.push_front(entry("b"));

        assert_eq!(list.pop_back().unwrap().key, "a");
        assert_eq!(list.pop_back().unwrap().key, "b");
        assert!(list.pop_back().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_middle() {
        let mut list = LruList::new();
        list.push_front(entry("a"));
        let b = list.push_front(entry("b"));
        list.push_front(entry("c"));

        let removed = list.remove(b).unwrap();
        assert_eq!(removed.key, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), vec!["c", "a"]);
        assert_eq!(keys_reversed(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_twice_returns_none() {
        let mut list = LruList::new();
        let a = list.push_front(entry("a"));

        assert!(list.remove(a).is_some());
        assert!(list.remove(a).is_none());
        assert!(list.get(a).is_none());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_unknown_handle_is_ignored() {
        let mut list = LruList::new();
        list.push_front(entry("a"));

        list.move_to_front(EntryHandle(42));
        assert!(list.remove(EntryHandle(42)).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut list = LruList::new();
        let a = list.push_front(entry("a"));
        list.push_front(entry("b"));
        list.remove(a);

        let c = list.push_front(entry("c"));
        assert_eq!(c, a);
        assert_eq!(list.slots.len(), 2);
        assert_eq!(keys(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut list = LruList::new();
        let a = list.push_front(entry("a"));

        list.get_mut(a).unwrap().value = "updated".to_string();
        assert_eq!(list.get(a).unwrap().value, "updated");
    }
}

//! LRU Tracker Module
//!
//! Implements the recency list backing LRU eviction: a doubly-linked list
//! stored in an arena of slots and addressed by stable indices.

use crate::cache::Entry;

// == LRU Tracker ==
/// Owns cache entries ordered by access time.
///
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// Entries live in `slots` and link to each other by slot index, so moving
/// or removing an entry given its index is O(1). Vacated slots are recorded
/// in `free` and reused by later insertions. An index stays valid until the
/// entry it refers to is removed.
#[derive(Debug)]
pub struct LruTracker<K, V> {
    /// Arena of entries, `None` for vacated slots
    slots: Vec<Option<Entry<K, V>>>,
    /// Vacated slot indices available for reuse
    free: Vec<usize>,
    /// Most recently used slot
    head: Option<usize>,
    /// Least recently used slot
    tail: Option<usize>,
    /// Number of live entries
    len: usize,
}

impl<K, V> Default for LruTracker<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> LruTracker<K, V> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tracker with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an entry as the most recently used and returns its slot.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        let entry = Some(Entry::new(key, value));
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = entry;
                idx
            }
            None => {
                self.slots.push(entry);
                self.slots.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks the entry at `idx` as most recently used.
    ///
    /// Does nothing if `idx` does not hold a live entry.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) || !self.is_live(idx) {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Removes the entry at `idx`, returning its key and value.
    pub fn remove(&mut self, idx: usize) -> Option<(K, V)> {
        if !self.is_live(idx) {
            return None;
        }
        self.unlink(idx);
        let entry = self.slots[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(entry.into_pair())
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if tracker is empty.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let idx = self.tail?;
        self.remove(idx)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_back(&self) -> Option<&K> {
        self.tail.and_then(|idx| self.get(idx)).map(|entry| &entry.key)
    }

    /// Returns the most recently used key.
    #[cfg(test)]
    pub(crate) fn peek_front(&self) -> Option<&K> {
        self.head.and_then(|idx| self.get(idx)).map(|entry| &entry.key)
    }

    /// Returns the entry stored at `idx`.
    pub fn get(&self, idx: usize) -> Option<&Entry<K, V>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the value stored at `idx`.
    ///
    /// Recency is left untouched.
    pub fn value_mut(&mut self, idx: usize) -> Option<&mut V> {
        self.entry_mut(idx).map(|entry| &mut entry.value)
    }

    // == Length ==
    /// Returns the number of tracked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the arena, live or vacated.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacated slots waiting for reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    // == Clear ==
    /// Drops every entry and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tracker: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn is_live(&self, idx: usize) -> bool {
        matches!(self.slots.get(idx), Some(Some(_)))
    }

    fn entry_mut(&mut self, idx: usize) -> Option<&mut Entry<K, V>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    /// Detaches `idx` from its neighbours, patching head/tail as needed.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.get(idx) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(entry) = self.entry_mut(p) {
                    entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(entry) = self.entry_mut(n) {
                    entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(entry) = self.entry_mut(idx) {
            entry.prev = None;
            entry.next = None;
        }
    }

    /// Links a detached `idx` in as the new head.
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(entry) = self.entry_mut(idx) {
            entry.prev = None;
            entry.next = old_head;
        }

        match old_head {
            Some(h) => {
                if let Some(entry) = self.entry_mut(h) {
                    entry.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
    }
}

// == Iterator ==
/// Front-to-back iterator over `(key, value)` pairs.
pub struct Iter<'a, K, V> {
    tracker: &'a LruTracker<K, V>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.tracker.get(self.cursor?)?;
        self.cursor = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

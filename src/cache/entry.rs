//! Cache Entry Module
//!
//! Defines a single cache entry as stored in the recency arena.

// == Cache Entry ==
/// A key-value pair linked into the recency list by slot index.
///
/// `prev` points toward the most recently used end, `next` toward the
/// least recently used end. `None` marks the respective end of the list.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    /// The key this entry is stored under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Slot of the next more recently used entry
    pub(crate) prev: Option<usize>,
    /// Slot of the next less recently used entry
    pub(crate) next: Option<usize>,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    /// Consumes the entry, returning the key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the LRU recency list,
//! guarded by a single mutex.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::cache::{CacheStats, LruTracker};
use crate::error::CacheError;

/// Upper bound on slots reserved up front; larger caches grow on demand.
const PREALLOCATE_LIMIT: usize = 1024;

// == Inner State ==
/// Everything the mutex protects. The index maps each key to the slot of
/// its entry in `order`; both always describe the same set of keys.
#[derive(Debug)]
struct Inner<K, V> {
    /// Key -> slot in `order`
    index: HashMap<K, usize>,
    /// Entries by recency
    order: LruTracker<K, V>,
    /// Hit/miss/eviction counters
    stats: CacheStats,
}

// == Cache Store ==
/// Fixed-capacity, thread-safe LRU cache.
///
/// Every operation takes the same lock for its whole duration, so calls
/// from concurrent threads never observe each other's intermediate state.
/// `get`, `put` and `remove` are O(1). Share it across threads with `Arc`.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Maximum number of entries allowed
    capacity: usize,
    inner: Mutex<Inner<K, V>>,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity);
        }

        let reserve = capacity.min(PREALLOCATE_LIMIT);
        Ok(Self {
            capacity,
            inner: Mutex::new(Inner {
                index: HashMap::with_capacity(reserve),
                order: LruTracker::with_capacity(reserve),
                stats: CacheStats::new(capacity),
            }),
        })
    }

    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// A hit marks the entry as most recently used. A miss leaves the
    /// cache unchanged.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut guard = self.lock();
        let inner = &mut *guard;

        match inner.index.get(key).copied() {
            Some(idx) => {
                inner.order.move_to_front(idx);
                inner.stats.record_hit();
                inner.order.get(idx).map(|entry| entry.value.clone())
            }
            None => {
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a key-value pair as the most recently used entry.
    ///
    /// If the key already exists its value is replaced in place and no
    /// eviction happens. Otherwise, if the cache is full, the least
    /// recently used entry is evicted first.
    pub fn put(&self, key: K, value: V) {
        let mut guard = self.lock();
        let inner = &mut *guard;

        if let Some(&idx) = inner.index.get(&key) {
            if let Some(slot) = inner.order.value_mut(idx) {
                *slot = value;
            }
            inner.order.move_to_front(idx);
            return;
        }

        // Cloned before any mutation so a failing clone leaves the cache as it was
        let list_key = key.clone();

        if inner.index.len() >= self.capacity {
            if let Some((evicted, _)) = inner.order.pop_back() {
                inner.index.remove(&evicted);
                inner.stats.record_eviction();
                debug!(capacity = self.capacity, "Evicted least recently used entry");
            }
        }

        let idx = inner.order.push_front(list_key, value);
        inner.index.insert(key, idx);
    }

    // == Remove ==
    /// Removes the entry stored under `key`.
    ///
    /// Returns whether the key was present.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut guard = self.lock();
        let inner = &mut *guard;

        match inner.index.remove(key) {
            Some(idx) => {
                inner.order.remove(idx);
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.index.clear();
        inner.order.clear();
    }

    // == Contains ==
    /// Checks whether `key` is present without affecting recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().index.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lock().index.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            size: inner.index.len(),
            ..inner.stats
        }
    }

    /// Returns the keys ordered from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.lock().order.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Recovers a poisoned lock. The cache's own code never panics while
    /// holding the guard, so the state stays consistent as long as the
    /// `Hash`, `Eq` and `Clone` impls of `K` and `V` do not panic midway.
    /// A panicking key `Clone` is tolerated since `put` clones before
    /// mutating.
    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Asserts the structural invariants under a single lock acquisition.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self)
    where
        K: std::fmt::Debug,
    {
        let inner = self.lock();

        assert_eq!(inner.index.len(), inner.order.len(), "index/list size mismatch");
        assert!(
            inner.index.len() <= self.capacity,
            "size {} exceeds capacity {}",
            inner.index.len(),
            self.capacity
        );

        let mut walked = 0;
        let mut last = None;
        for (key, _) in inner.order.iter() {
            let idx = *inner
                .index
                .get(key)
                .unwrap_or_else(|| panic!("key {key:?} missing from index"));
            let slot_key = inner.order.get(idx).map(|entry| &entry.key);
            assert_eq!(slot_key, Some(key), "index points at the wrong slot");
            walked += 1;
            last = Some(key);
        }
        assert_eq!(walked, inner.order.len(), "list links are broken");
        assert_eq!(last, inner.order.peek_back(), "tail is not the last entry");
        assert_eq!(
            inner.order.slot_count(),
            inner.order.len() + inner.order.free_count(),
            "leaked arena slots"
        );
    }
}

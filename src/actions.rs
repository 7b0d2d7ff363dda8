//! Registry mapping opaque tokens to actions.
//!
//! A launcher host can only pass plain data back to the extension, so an
//! action (a callback, a note path to open) is stored here and the host is
//! given an [`ActionToken`] instead. The registry holds a bounded number of
//! entries and drops the least recently used one when full.

use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use std::fmt;
use uuid::Uuid;

pub const DEFAULT_CAPACITY: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionToken(Uuid);

impl fmt::Display for ActionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub struct ActionRegistry<T> {
    capacity: usize,
    cache: Cache<ActionToken, T>,
}

impl<T: Clone + Send + Sync + 'static> ActionRegistry<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A registry holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let cache = Cache::builder()
            .max_capacity(capacity as u64)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { capacity, cache }
    }

    /// Stores `value` and returns a fresh token for it, evicting the least
    /// recently used entry if the registry is full.
    pub fn insert(&self, value: T) -> ActionToken {
        let token = ActionToken(Uuid::new_v4());
        self.cache.insert(token, value);
        // apply pending reads and evictions now so the bound holds on return
        self.cache.run_pending_tasks();
        token
    }

    /// Looks up `token`, marking the entry as recently used.
    pub fn get(&self, token: &ActionToken) -> Option<T> {
        self.cache.get(token)
    }

    pub fn len(&self) -> usize {
        self.cache.run_pending_tasks();
        self.cache.entry_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ActionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

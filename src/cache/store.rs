//! Cache Store Module
//!
//! Keyed storage of memoized values. Expiry is detected lazily on lookup;
//! stale entries stay in place until they are overwritten or purged.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Lookup Outcome ==
/// Result of consulting the store for a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// A fresh entry exists
    Fresh(T),
    /// An entry exists but its TTL has elapsed
    Stale,
    /// No entry has ever been stored for the key
    Absent,
}

// == Cache Store ==
/// Map from encoded key to entry, owned by one memoized operation.
#[derive(Debug)]
pub struct CacheStore<T> {
    entries: HashMap<String, CacheEntry<T>>,
    stats: CacheStats,
}

impl<T> Default for CacheStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CacheStore<T> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: String, value: T, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Purge Expired ==
    /// Removes all stale entries and returns how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    pub fn record_failure(&mut self) {
        self.stats.record_failure();
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> CacheStore<T> {
    // == Lookup ==
    /// Reads the entry for `key` and decides its freshness in one step.
    ///
    /// Counts a hit for `Fresh` and a miss otherwise.
    pub fn lookup(&mut self, key: &str) -> Lookup<T> {
        let outcome = match self.entries.get(key) {
            Some(entry) if entry.is_expired() => Lookup::Stale,
            Some(entry) => Lookup::Fresh(entry.value.clone()),
            None => Lookup::Absent,
        };

        match outcome {
            Lookup::Fresh(_) => self.stats.record_hit(),
            _ => self.stats.record_miss(),
        }
        outcome
    }
}

//! Append-only tables.
//!
//! Entries are inserted once and never overwritten or removed. A second
//! insert under an existing key is reported as a conflict and leaves the
//! stored value untouched.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Result of inserting into an [`AppendOnlyMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// The value was inserted.
    Inserted,
    /// The key already had a value; nothing changed.
    Conflict,
}

impl InsertResult {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertResult::Inserted)
    }
}

/// A map whose entries can only be added.
#[derive(Debug, Clone)]
pub struct AppendOnlyMap<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> AppendOnlyMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a value if the key is vacant.
    pub fn insert(&mut self, key: K, value: V) -> InsertResult {
        match self.entries.entry(key) {
            Entry::Occupied(_) => InsertResult::Conflict,
            Entry::Vacant(e) => {
                e.insert(value);
                InsertResult::Inserted
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash, V> Default for AppendOnlyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

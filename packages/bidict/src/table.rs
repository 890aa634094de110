//! Storage backends for the two directions of a bidict.
//!
//! A [`Table`] is a plain map with the few extra primitives a bidict needs to keep
//! two tables in lockstep and to undo a partially applied bulk write: removal that
//! reports where the entry lived, re-insertion at that place, and renaming a key
//! without moving it.

use std::{
    collections::{hash_map, HashMap},
    hash::{BuildHasher, Hash},
};

use indexmap::IndexMap;

pub trait Table<K, V>: Default + Clone {
    /// Position token returned by [`Table::remove`] and consumed by [`Table::restore`].
    type Slot: Copy;
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IntoIter: Iterator<Item = (K, V)>;

    /// Whether iteration follows insertion order.
    const ORDERED: bool;

    fn with_capacity(capacity: usize) -> Self;
    fn len(&self) -> usize;
    fn get(&self, key: &K) -> Option<&V>;
    /// Inserts or replaces in place, returning the previous value.
    fn insert(&mut self, key: K, value: V) -> Option<V>;
    fn remove(&mut self, key: &K) -> Option<(Self::Slot, K, V)>;
    fn restore(&mut self, slot: Self::Slot, key: K, value: V);
    /// Renames `old` to `key`, keeping its value and position. Returns the old key.
    fn replace_key(&mut self, old: &K, key: K) -> Option<K>;
    /// Removes an entry: the last one for ordered tables, an arbitrary one otherwise.
    fn pop(&mut self) -> Option<(K, V)>;
    fn clear(&mut self);
    fn iter(&self) -> Self::Iter<'_>;
    fn into_entries(self) -> Self::IntoIter;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V, S> Table<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default + Clone,
{
    type Slot = ();
    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IntoIter = hash_map::IntoIter<K, V>;

    const ORDERED: bool = false;

    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<((), K, V)> {
        let (key, value) = self.remove_entry(key)?;
        Some(((), key, value))
    }

    fn restore(&mut self, _slot: (), key: K, value: V) {
        HashMap::insert(self, key, value);
    }

    fn replace_key(&mut self, old: &K, key: K) -> Option<K> {
        let (old, value) = self.remove_entry(old)?;
        HashMap::insert(self, key, value);
        Some(old)
    }

    /// Scans from the start of the table, so repeated pops over a table emptied from
    /// the front cost O(capacity) each. Drain with `into_entries` or `clear` instead.
    fn pop(&mut self) -> Option<(K, V)> {
        let key = self.keys().next()?.clone();
        self.remove_entry(&key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn into_entries(self) -> Self::IntoIter {
        IntoIterator::into_iter(self)
    }
}

/// Removals shift the following entries so both directions of an ordered bidict keep
/// the same order; this makes them O(n) instead of the O(1) `swap_remove`.
impl<K, V, S> Table<K, V> for IndexMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default + Clone,
{
    type Slot = usize;
    type Iter<'a>
        = indexmap::map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IntoIter = indexmap::map::IntoIter<K, V>;

    const ORDERED: bool = true;

    fn with_capacity(capacity: usize) -> Self {
        IndexMap::with_capacity_and_hasher(capacity, S::default())
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        IndexMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<(usize, K, V)> {
        self.shift_remove_full(key)
    }

    fn restore(&mut self, slot: usize, key: K, value: V) {
        self.shift_insert(slot, key, value);
    }

    fn replace_key(&mut self, old: &K, key: K) -> Option<K> {
        let (index, old, value) = self.shift_remove_full(old)?;
        self.shift_insert(index, key, value);
        Some(old)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        IndexMap::pop(self)
    }

    fn clear(&mut self) {
        IndexMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }

    fn into_entries(self) -> Self::IntoIter {
        IntoIterator::into_iter(self)
    }
}

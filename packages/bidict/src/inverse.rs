//! Live views of a bidict from the value side.
//!
//! Both views borrow the map, so they always reflect its current state and cost
//! nothing to create. In a view, "key" means the map's value and "value" the map's key.

use std::{
    collections::HashMap,
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
};

use crate::{
    bidict::Bidict,
    error::BidictError,
    policy::{OnDup, ON_DUP_OVERWRITE, ON_DUP_RAISE},
    table::Table,
    write::{self, Journal},
};

pub struct Inverse<'a, K, V, F, I> {
    bidict: &'a Bidict<K, V, F, I>,
}

impl<'a, K, V, F, I> Inverse<'a, K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    pub(crate) fn new(bidict: &'a Bidict<K, V, F, I>) -> Self {
        Self { bidict }
    }

    pub fn len(&self) -> usize {
        self.bidict.inv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bidict.inv.is_empty()
    }

    pub fn get(&self, value: &V) -> Option<&'a K> {
        self.bidict.inv.get(value)
    }

    pub fn try_get(&self, value: &V) -> Result<&'a K, BidictError<V, K>> {
        self.get(value).ok_or(BidictError::KeyNotFound)
    }

    pub fn contains_key(&self, value: &V) -> bool {
        self.bidict.inv.contains_key(value)
    }

    pub fn iter(&self) -> I::Iter<'a> {
        self.bidict.inv.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a V> + 'a {
        self.bidict.inv.iter().map(|(v, _)| v)
    }

    pub fn values(&self) -> impl Iterator<Item = &'a K> + 'a {
        self.bidict.fwd.iter().map(|(k, _)| k)
    }

    /// Inverse of the inverse: the original map.
    pub fn inverse(&self) -> &'a Bidict<K, V, F, I> {
        self.bidict
    }

    /// Copies the view into an owned map going from values to keys.
    pub fn to_bidict(&self) -> Bidict<V, K, I, F> {
        self.bidict.clone().into_inverse()
    }
}

impl<K, V, F, I> Clone for Inverse<'_, K, V, F, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, F, I> Copy for Inverse<'_, K, V, F, I> {}

impl<K, V, F, I> Debug for Inverse<'_, K, V, F, I>
where
    K: Hash + Eq + Clone + Debug,
    V: Hash + Eq + Clone + Debug,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Inverse(")?;
        f.debug_map().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl<K, V, F, I, S> PartialEq<HashMap<V, K, S>> for Inverse<'_, K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
    S: BuildHasher,
{
    fn eq(&self, other: &HashMap<V, K, S>) -> bool {
        self.len() == other.len() && self.iter().all(|(v, k)| other.get(v) == Some(k))
    }
}

impl<'a, K, V, F, I> IntoIterator for Inverse<'a, K, V, F, I>
where
    I: Table<V, K>,
{
    type Item = (&'a V, &'a K);
    type IntoIter = I::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.bidict.inv.iter()
    }
}

/// Mutable inverse view. Writes go through the same code path as the map's own, with
/// the policy turned around: the view's `key` action applies to the map's values.
pub struct InverseMut<'a, K, V, F, I> {
    bidict: &'a mut Bidict<K, V, F, I>,
}

impl<'a, K, V, F, I> InverseMut<'a, K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    pub(crate) fn new(bidict: &'a mut Bidict<K, V, F, I>) -> Self {
        Self { bidict }
    }

    pub fn as_inverse(&self) -> Inverse<'_, K, V, F, I> {
        Inverse::new(&*self.bidict)
    }

    pub fn len(&self) -> usize {
        self.bidict.inv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bidict.inv.is_empty()
    }

    pub fn get(&self, value: &V) -> Option<&K> {
        self.bidict.inv.get(value)
    }

    pub fn contains_key(&self, value: &V) -> bool {
        self.bidict.inv.contains_key(value)
    }

    /// Associates `value` with `key` using the map's policy seen from this side.
    pub fn insert(&mut self, value: V, key: K) -> Result<Option<K>, BidictError<V, K>> {
        let on_dup = self.bidict.on_dup.swapped();
        self.put_with(value, key, on_dup)
    }

    pub fn put(&mut self, value: V, key: K) -> Result<(), BidictError<V, K>> {
        self.put_with(value, key, ON_DUP_RAISE).map(|_| ())
    }

    /// `on_dup` is interpreted from this view's side.
    pub fn put_with(&mut self, value: V, key: K, on_dup: OnDup) -> Result<Option<K>, BidictError<V, K>> {
        let bidict = &mut *self.bidict;
        write::write(&mut bidict.inv, &mut bidict.fwd, value, key, on_dup, &mut Journal::disabled())
    }

    pub fn force_put(&mut self, value: V, key: K) -> Option<K> {
        self.put_with(value, key, ON_DUP_OVERWRITE).ok().flatten()
    }

    pub fn remove(&mut self, value: &V) -> Option<K> {
        self.bidict.remove_by_value(value)
    }
}

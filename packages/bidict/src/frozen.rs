use std::{
    collections::{hash_map::DefaultHasher, HashMap},
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};

use once_cell::unsync::OnceCell;

use crate::{bidict::Bidict, error::BidictError, inverse::Inverse, table::Table};

/// Immutable bidict that can be hashed, e.g. to be used as a key of another map.
///
/// The hash is computed on first use and cached. For unordered tables it does not
/// depend on iteration order; for ordered tables it does, and so does equality.
#[derive(Clone)]
pub struct FrozenBidict<K, V, F = HashMap<K, V>, I = HashMap<V, K>> {
    inner: Bidict<K, V, F, I>,
    hash: OnceCell<u64>,
}

impl<K, V, F, I> FrozenBidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    pub fn try_from_iter<It: IntoIterator<Item = (K, V)>>(items: It) -> Result<Self, BidictError<K, V>> {
        Bidict::try_from_iter(items).map(Self::from)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn try_get(&self, key: &K) -> Result<&V, BidictError<K, V>> {
        self.inner.try_get(key)
    }

    pub fn get_by_value(&self, value: &V) -> Option<&K> {
        self.inner.get_by_value(value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.inner.contains_value(value)
    }

    pub fn iter(&self) -> F::Iter<'_> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.inner.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.values()
    }

    pub fn inverse(&self) -> Inverse<'_, K, V, F, I> {
        self.inner.inverse()
    }

    pub fn into_inverse(self) -> FrozenBidict<V, K, I, F> {
        self.inner.into_inverse().into()
    }

    pub fn as_bidict(&self) -> &Bidict<K, V, F, I> {
        &self.inner
    }

    /// Thaws back into a mutable map.
    pub fn into_bidict(self) -> Bidict<K, V, F, I> {
        self.inner
    }

    pub fn hash_value(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            if F::ORDERED {
                for item in self.inner.iter() {
                    item.hash(&mut hasher);
                }
            } else {
                let combined = self.inner.iter().fold(0u64, |acc, item| {
                    let mut item_hasher = DefaultHasher::new();
                    item.hash(&mut item_hasher);
                    acc.wrapping_add(item_hasher.finish())
                });
                hasher.write_u64(combined);
            }
            hasher.write_usize(self.inner.len());
            hasher.finish()
        })
    }
}

impl<K, V, F, I> From<Bidict<K, V, F, I>> for FrozenBidict<K, V, F, I> {
    fn from(inner: Bidict<K, V, F, I>) -> Self {
        Self { inner, hash: OnceCell::new() }
    }
}

impl<K, V, F, I> PartialEq for FrozenBidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn eq(&self, other: &Self) -> bool {
        if F::ORDERED {
            self.inner.equals_ordered(&other.inner)
        } else {
            self.inner == other.inner
        }
    }
}

impl<K, V, F, I> Eq for FrozenBidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
}

impl<K, V, F, I> Hash for FrozenBidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl<K, V, F, I> Debug for FrozenBidict<K, V, F, I>
where
    K: Hash + Eq + Clone + Debug,
    V: Hash + Eq + Clone + Debug,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FrozenBidict(")?;
        f.debug_map().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl<'a, K, V, F, I> IntoIterator for &'a FrozenBidict<K, V, F, I>
where
    F: Table<K, V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = F::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.inner).into_iter()
    }
}

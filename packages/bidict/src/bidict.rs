use std::{
    collections::HashMap,
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};

use crate::{
    error::BidictError,
    inverse::{Inverse, InverseMut},
    policy::{OnDup, ON_DUP_DEFAULT, ON_DUP_OVERWRITE, ON_DUP_RAISE},
    table::Table,
    write::{self, Journal},
};

/// One-to-one map between keys and values, with lookup in both directions.
///
/// `fwd` maps keys to values and `inv` maps values back to keys. Every write goes
/// through both tables at once, so `inv` is always the exact transpose of `fwd`.
/// The table types pick the layout: two `HashMap`s by default, or two `IndexMap`s
/// for [`crate::OrderedBidict`].
///
/// Writes that would break uniqueness are resolved by an [`OnDup`] policy. `insert`
/// and `update` use the map's own policy ([`ON_DUP_DEFAULT`] unless configured),
/// `put` always raises and `force_put` always overwrites.
#[derive(Clone)]
pub struct Bidict<K, V, F = HashMap<K, V>, I = HashMap<V, K>> {
    pub(crate) fwd: F,
    pub(crate) inv: I,
    pub(crate) on_dup: OnDup,
    _marker: PhantomData<(K, V)>,
}

impl<K, V, F, I> Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    pub fn new() -> Self {
        Self::with_on_dup(ON_DUP_DEFAULT)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_tables(F::with_capacity(capacity), I::with_capacity(capacity), ON_DUP_DEFAULT)
    }

    /// Map whose `insert` and `update` resolve collisions with `on_dup`.
    pub fn with_on_dup(on_dup: OnDup) -> Self {
        Self::from_tables(F::default(), I::default(), on_dup)
    }

    /// Map that overwrites on every kind of collision, so `insert` never fails.
    pub fn loose() -> Self {
        Self::with_on_dup(ON_DUP_OVERWRITE)
    }

    pub(crate) fn from_tables(fwd: F, inv: I, on_dup: OnDup) -> Self {
        Self {
            fwd,
            inv,
            on_dup,
            _marker: PhantomData,
        }
    }

    /// Builds a map with the default policy, failing on the first rejected item.
    pub fn try_from_iter<It: IntoIterator<Item = (K, V)>>(items: It) -> Result<Self, BidictError<K, V>> {
        let mut bidict = Self::new();
        bidict.update(items)?;
        Ok(bidict)
    }

    pub fn on_dup(&self) -> OnDup {
        self.on_dup
    }

    pub fn set_on_dup(&mut self, on_dup: OnDup) {
        self.on_dup = on_dup;
    }

    pub fn len(&self) -> usize {
        self.fwd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fwd.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.fwd.get(key)
    }

    pub fn try_get(&self, key: &K) -> Result<&V, BidictError<K, V>> {
        self.fwd.get(key).ok_or(BidictError::KeyNotFound)
    }

    pub fn get_by_value(&self, value: &V) -> Option<&K> {
        self.inv.get(value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.fwd.contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.inv.contains_key(value)
    }

    pub fn iter(&self) -> F::Iter<'_> {
        self.fwd.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.fwd.iter().map(|(k, _)| k)
    }

    /// Values come from the inverse table's keys; for ordered maps the order matches `keys`.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.inv.iter().map(|(v, _)| v)
    }

    /// Inverse items `(value, key)` without building a new map.
    pub fn inverted_iter(&self) -> I::Iter<'_> {
        self.inv.iter()
    }

    pub fn inverse(&self) -> Inverse<'_, K, V, F, I> {
        Inverse::new(self)
    }

    pub fn inverse_mut(&mut self) -> InverseMut<'_, K, V, F, I> {
        InverseMut::new(self)
    }

    /// Turns the map around without copying: the tables swap roles.
    pub fn into_inverse(self) -> Bidict<V, K, I, F> {
        Bidict::from_tables(self.inv, self.fwd, self.on_dup.swapped())
    }

    /// Associates `key` with `value` using the map's policy.
    ///
    /// Returns the value previously associated with `key` when it was replaced.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, BidictError<K, V>> {
        self.put_with(key, value, self.on_dup)
    }

    /// Inserts only if neither `key` nor `value` is already present in another item.
    pub fn put(&mut self, key: K, value: V) -> Result<(), BidictError<K, V>> {
        self.put_with(key, value, ON_DUP_RAISE).map(|_| ())
    }

    pub fn put_with(&mut self, key: K, value: V, on_dup: OnDup) -> Result<Option<V>, BidictError<K, V>> {
        write::write(&mut self.fwd, &mut self.inv, key, value, on_dup, &mut Journal::disabled())
    }

    /// Associates `key` with `value` unconditionally, evicting any item holding either.
    pub fn force_put(&mut self, key: K, value: V) -> Option<V> {
        // overwriting never raises
        self.put_with(key, value, ON_DUP_OVERWRITE).ok().flatten()
    }

    /// Returns the value of `key`, inserting `default` first when the key is absent.
    pub fn get_or_insert(&mut self, key: K, default: V) -> Result<&V, BidictError<K, V>> {
        if !self.fwd.contains_key(&key) {
            self.insert(key.clone(), default)?;
        }
        self.try_get(&key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        write::remove(&mut self.fwd, &mut self.inv, key)
    }

    pub fn try_remove(&mut self, key: &K) -> Result<V, BidictError<K, V>> {
        self.remove(key).ok_or(BidictError::KeyNotFound)
    }

    pub fn remove_by_value(&mut self, value: &V) -> Option<K> {
        write::remove(&mut self.inv, &mut self.fwd, value).map(|(_, k)| k)
    }

    /// Removes some item: the most recently inserted one for ordered maps.
    ///
    /// For the unordered layout each call scans the table from its start, so emptying a
    /// large map this way is quadratic. Use `into_iter` or `clear` to drain it.
    pub fn pop_item(&mut self) -> Option<(K, V)> {
        let (key, value) = self.fwd.pop()?;
        self.inv.remove(&value);
        Some((key, value))
    }

    pub fn clear(&mut self) {
        self.fwd.clear();
        self.inv.clear();
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&K, &V) -> bool) {
        let rejected = self.fwd.iter().filter(|&(k, v)| !keep(k, v)).map(|(k, _)| k.clone()).collect::<Vec<_>>();
        for key in rejected {
            self.remove(&key);
        }
    }

    /// Bulk `insert`. Either every item is applied or, on the first rejection, none is.
    pub fn update<It: IntoIterator<Item = (K, V)>>(&mut self, items: It) -> Result<(), BidictError<K, V>> {
        self.put_all(self.on_dup, items)
    }

    /// Bulk `force_put`.
    pub fn force_update<It: IntoIterator<Item = (K, V)>>(&mut self, items: It) {
        for (key, value) in items {
            self.force_put(key, value);
        }
    }

    /// Bulk `put_with`. Items are written in order, so duplicates inside `items` are
    /// resolved against the items before them. A rejection rolls back the whole batch.
    pub fn put_all<It: IntoIterator<Item = (K, V)>>(&mut self, on_dup: OnDup, items: It) -> Result<(), BidictError<K, V>> {
        let mut journal = if on_dup.can_fail() {
            Journal::recording()
        } else {
            Journal::disabled()
        };
        for (key, value) in items {
            if let Err(err) = write::write(&mut self.fwd, &mut self.inv, key, value, on_dup, &mut journal) {
                log::debug!("[Bidict] bulk write rejected, rollback {} changes", journal.len());
                write::rollback(&mut self.fwd, &mut self.inv, journal);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Order-sensitive equality.
    pub fn equals_ordered<F2, I2>(&self, other: &Bidict<K, V, F2, I2>) -> bool
    where
        F2: Table<K, V>,
        I2: Table<V, K>,
    {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, F, I> Default for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, F, I> Debug for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone + Debug,
    V: Hash + Eq + Clone + Debug,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if F::ORDERED { "OrderedBidict(" } else { "Bidict(" })?;
        f.debug_map().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

/// Order-insensitive, like `IndexMap`'s equality. Use [`Bidict::equals_ordered`] to
/// also compare order.
impl<K, V, F, I, F2, I2> PartialEq<Bidict<K, V, F2, I2>> for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
    F2: Table<K, V>,
    I2: Table<V, K>,
{
    fn eq(&self, other: &Bidict<K, V, F2, I2>) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, F, I> Eq for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
}

impl<K, V, F, I, S> PartialEq<HashMap<K, V, S>> for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
    S: BuildHasher,
{
    fn eq(&self, other: &HashMap<K, V, S>) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

/// Collects with overwrite semantics: later items evict earlier ones they collide
/// with. Use [`Bidict::try_from_iter`] to reject duplicates instead.
impl<K, V, F, I> FromIterator<(K, V)> for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn from_iter<It: IntoIterator<Item = (K, V)>>(items: It) -> Self {
        let mut bidict = Self::new();
        bidict.force_update(items);
        bidict
    }
}

impl<K, V, F, I> Extend<(K, V)> for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn extend<It: IntoIterator<Item = (K, V)>>(&mut self, items: It) {
        self.force_update(items);
    }
}

impl<K, V, F, I> IntoIterator for Bidict<K, V, F, I>
where
    F: Table<K, V>,
{
    type Item = (K, V);
    type IntoIter = F::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.fwd.into_entries()
    }
}

impl<'a, K, V, F, I> IntoIterator for &'a Bidict<K, V, F, I>
where
    F: Table<K, V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = F::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.fwd.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{OnDupAction, ON_DUP_RAISE};

    fn elements() -> Bidict<&'static str, &'static str> {
        Bidict::try_from_iter([("H", "hydrogen"), ("He", "helium"), ("Li", "lithium")]).expect("Should build")
    }

    fn assert_consistent<K, V, F, I>(bidict: &Bidict<K, V, F, I>)
    where
        K: Hash + Eq + Clone + Debug,
        V: Hash + Eq + Clone + Debug,
        F: Table<K, V>,
        I: Table<V, K>,
    {
        assert_eq!(bidict.fwd.len(), bidict.inv.len());
        for (k, v) in bidict.iter() {
            assert_eq!(bidict.get_by_value(v), Some(k));
        }
    }

    #[test]
    fn lookup_both_directions_and_remove() {
        let mut bidict: Bidict<u32, &str> = Bidict::new();
        bidict.insert(1, "a").expect("Should insert");
        bidict.insert(2, "b").expect("Should insert");

        assert_eq!(bidict.try_get(&1), Ok(&"a"));
        assert_eq!(bidict.inverse().try_get(&"b"), Ok(&2));

        assert_eq!(bidict.remove(&1), Some("a"));
        assert_eq!(bidict.try_get(&1), Err(BidictError::KeyNotFound));
        assert_eq!(bidict.inverse().try_get(&"a"), Err(BidictError::KeyNotFound));
        assert_eq!(bidict.len(), 1);
        assert_consistent(&bidict);
    }

    #[test]
    fn insert_overwrites_key_but_rejects_taken_value() {
        let mut bidict = elements();
        assert_eq!(bidict.insert("H", "hydrogenium"), Ok(Some("hydrogen")));
        assert_eq!(bidict.get_by_value(&"hydrogen"), None);
        assert_eq!(bidict.get_by_value(&"hydrogenium"), Some(&"H"));

        assert_eq!(bidict.insert("X", "helium"), Err(BidictError::ValueDuplicate { value: "helium", existing_key: "He" }));
        assert_eq!(bidict.insert("H", "helium"), Err(BidictError::KeyAndValueDuplicate { key: "H", value: "helium" }));
        assert_eq!(bidict.len(), 3);
        assert_consistent(&bidict);
    }

    #[test]
    fn put_rejects_any_collision() {
        let mut bidict = elements();
        assert_eq!(bidict.put("H", "hydrogen"), Ok(()));
        assert_eq!(bidict.put("H", "other"), Err(BidictError::KeyDuplicate { key: "H", existing_value: "hydrogen" }));
        assert_eq!(bidict.put("Be", "beryllium"), Ok(()));
        assert_eq!(bidict.get(&"Be"), Some(&"beryllium"));
    }

    #[test]
    fn put_with_ignore_keeps_existing() {
        let mut bidict = elements();
        let ignore = OnDup::all(OnDupAction::Ignore);
        assert_eq!(bidict.put_with("H", "other", ignore), Ok(None));
        assert_eq!(bidict.put_with("X", "helium", ignore), Ok(None));
        assert_eq!(bidict, elements());
    }

    #[test]
    fn force_put_evicts_both_colliding_items() {
        let mut bidict = elements();
        assert_eq!(bidict.force_put("H", "helium"), Some("hydrogen"));
        assert_eq!(bidict.len(), 2);
        assert_eq!(bidict.get(&"He"), None);
        assert_eq!(bidict.get(&"H"), Some(&"helium"));
        assert_consistent(&bidict);
    }

    #[test]
    fn loose_insert_never_fails() {
        let mut bidict: Bidict<u32, char> = Bidict::loose();
        bidict.insert(1, 'a').expect("Should insert");
        bidict.insert(2, 'a').expect("Should insert");
        assert_eq!(bidict.get(&1), None);
        assert_eq!(bidict.get(&2), Some(&'a'));
        assert_consistent(&bidict);
    }

    #[test]
    fn get_or_insert_only_inserts_missing_key() {
        let mut bidict = elements();
        assert_eq!(bidict.get_or_insert("H", "ignored"), Ok(&"hydrogen"));
        assert_eq!(bidict.get_or_insert("Be", "beryllium"), Ok(&"beryllium"));
        assert!(bidict.get_or_insert("B", "helium").is_err());
        assert_eq!(bidict.len(), 4);
    }

    #[test]
    fn remove_by_value_and_pop_item() {
        let mut bidict = elements();
        assert_eq!(bidict.remove_by_value(&"helium"), Some("He"));
        assert_eq!(bidict.remove_by_value(&"helium"), None);
        assert_eq!(bidict.try_remove(&"He"), Err(BidictError::KeyNotFound));

        let (key, value) = bidict.pop_item().expect("Should pop");
        assert!(!bidict.contains_key(&key));
        assert!(!bidict.contains_value(&value));
        bidict.pop_item().expect("Should pop");
        assert_eq!(bidict.pop_item(), None);
        assert!(bidict.is_empty());
        assert_consistent(&bidict);
    }

    #[test]
    fn retain_and_clear() {
        let mut bidict: Bidict<u32, u32> = (0..10).map(|i| (i, i * 10)).collect();
        bidict.retain(|k, _| k % 2 == 0);
        assert_eq!(bidict.len(), 5);
        assert_eq!(bidict.get_by_value(&30), None);
        assert_consistent(&bidict);

        bidict.clear();
        assert!(bidict.is_empty());
        assert!(bidict.inverse().is_empty());
    }

    #[test_log::test]
    fn failed_update_changes_nothing() {
        let mut bidict = elements();
        let res = bidict.update([("Be", "beryllium"), ("H", "hydrogenium"), ("B", "lithium")]);
        assert_eq!(res, Err(BidictError::ValueDuplicate { value: "lithium", existing_key: "Li" }));
        assert_eq!(bidict, elements());
        assert_consistent(&bidict);
    }

    #[test]
    fn update_resolves_duplicates_inside_the_batch() {
        let mut bidict: Bidict<u32, char> = Bidict::new();
        assert_eq!(bidict.update([(1, 'a'), (1, 'b')]), Ok(()));
        assert_eq!(bidict.get(&1), Some(&'b'));

        assert_eq!(bidict.update([(2, 'c'), (3, 'c')]), Err(BidictError::ValueDuplicate { value: 'c', existing_key: 2 }));
        assert_eq!(bidict.len(), 1);
    }

    #[test]
    fn put_all_and_force_update() {
        let mut bidict = elements();
        assert!(bidict.put_all(ON_DUP_RAISE, [("Be", "beryllium"), ("H", "x")]).is_err());
        assert!(!bidict.contains_key(&"Be"));

        bidict.force_update([("Be", "beryllium"), ("H", "helium")]);
        assert_eq!(bidict.len(), 3);
        assert_eq!(bidict.get(&"H"), Some(&"helium"));
        assert_consistent(&bidict);
    }

    #[test]
    fn from_iter_keeps_the_last_colliding_item() {
        let bidict: Bidict<u32, char> = [(1, 'a'), (2, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(bidict, HashMap::from([(2, 'b')]));
    }

    #[test]
    fn into_inverse_swaps_roles() {
        let inverse = elements().into_inverse();
        assert_eq!(inverse.get(&"helium"), Some(&"He"));
        assert_eq!(inverse.on_dup(), ON_DUP_DEFAULT.swapped());
        assert_eq!(inverse.into_inverse(), elements());
    }

    #[test]
    fn equality_with_hash_map() {
        let bidict = elements();
        let map = HashMap::from([("H", "hydrogen"), ("He", "helium"), ("Li", "lithium")]);
        assert_eq!(bidict, map);
        assert_ne!(bidict, HashMap::from([("H", "hydrogen")]));
    }

    #[test]
    fn debug_prints_forward_items() {
        let bidict: Bidict<u32, char> = Bidict::try_from_iter([(1, 'a')]).expect("Should build");
        assert_eq!(format!("{bidict:?}"), "Bidict({1: 'a'})");
    }
}

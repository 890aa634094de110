use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::{bidict::Bidict, error::BidictError};

/// Bidict that remembers insertion order, in both directions.
///
/// Replacing the value of an existing key keeps the key's position; an item evicted by
/// a collision leaves its position and the new item is appended.
pub type OrderedBidict<K, V, S = std::collections::hash_map::RandomState> = Bidict<K, V, IndexMap<K, V, S>, IndexMap<V, K, S>>;

impl<K, V, S> Bidict<K, V, IndexMap<K, V, S>, IndexMap<V, K, S>>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    S: BuildHasher + Default + Clone,
{
    pub fn first(&self) -> Option<(&K, &V)> {
        self.fwd.first()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.fwd.last()
    }

    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.fwd.get_index(index)
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.fwd.get_index_of(key)
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let item = self.fwd.shift_remove_index(0)?;
        self.inv.shift_remove_index(0);
        Some(item)
    }

    /// Moves `key` to the end (`last`) or to the front of the iteration order.
    pub fn move_to_end(&mut self, key: &K, last: bool) -> Result<(), BidictError<K, V>> {
        let from = self.fwd.get_index_of(key).ok_or(BidictError::KeyNotFound)?;
        let to = if last { self.fwd.len() - 1 } else { 0 };
        self.fwd.move_index(from, to);
        self.inv.move_index(from, to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BidictError, OrderedBidict};

    fn items(bidict: &OrderedBidict<u32, char>) -> Vec<(u32, char)> {
        bidict.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn assert_mirrored(bidict: &OrderedBidict<u32, char>) {
        let inverse = bidict.inverted_iter().map(|(v, k)| (*k, *v)).collect::<Vec<_>>();
        assert_eq!(items(bidict), inverse);
    }

    fn abc() -> OrderedBidict<u32, char> {
        OrderedBidict::try_from_iter([(1, 'a'), (2, 'b'), (3, 'c')]).expect("Should build")
    }

    #[test]
    fn keeps_insertion_order() {
        let mut bidict = abc();
        bidict.insert(0, 'z').expect("Should insert");
        assert_eq!(items(&bidict), vec![(1, 'a'), (2, 'b'), (3, 'c'), (0, 'z')]);
        assert_eq!(bidict.values().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c', 'z']);
        assert_eq!(bidict.first(), Some((&1, &'a')));
        assert_eq!(bidict.last(), Some((&0, &'z')));
        assert_eq!(bidict.get_index(1), Some((&2, &'b')));
        assert_eq!(bidict.index_of(&3), Some(2));
    }

    #[test]
    fn overwriting_value_keeps_key_position() {
        let mut bidict = abc();
        bidict.insert(2, 'x').expect("Should insert");
        assert_eq!(items(&bidict), vec![(1, 'a'), (2, 'x'), (3, 'c')]);
        assert_mirrored(&bidict);
    }

    #[test]
    fn value_collision_appends_new_item() {
        let mut bidict = abc();
        bidict.force_put(9, 'a');
        assert_eq!(items(&bidict), vec![(2, 'b'), (3, 'c'), (9, 'a')]);
        assert_mirrored(&bidict);
    }

    #[test]
    fn failed_update_restores_order() {
        let mut bidict = abc();
        let res = bidict.update([(2, 'q'), (4, 'd'), (5, 'a')]);
        assert_eq!(res, Err(BidictError::ValueDuplicate { value: 'a', existing_key: 1 }));
        assert_eq!(items(&bidict), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
        assert_mirrored(&bidict);
    }

    #[test]
    fn pop_from_both_ends() {
        let mut bidict = abc();
        assert_eq!(bidict.pop_item(), Some((3, 'c')));
        assert_eq!(bidict.pop_first(), Some((1, 'a')));
        assert_eq!(items(&bidict), vec![(2, 'b')]);
        assert_mirrored(&bidict);
    }

    #[test]
    fn move_to_end_moves_both_directions() {
        let mut bidict = abc();
        bidict.move_to_end(&1, true).expect("Should move");
        assert_eq!(items(&bidict), vec![(2, 'b'), (3, 'c'), (1, 'a')]);
        bidict.move_to_end(&3, false).expect("Should move");
        assert_eq!(items(&bidict), vec![(3, 'c'), (2, 'b'), (1, 'a')]);
        assert_mirrored(&bidict);
        assert_eq!(bidict.move_to_end(&7, true), Err(BidictError::KeyNotFound));
    }

    #[test]
    fn debug_names_the_ordered_layout() {
        assert_eq!(format!("{:?}", abc()), "OrderedBidict({1: 'a', 2: 'b', 3: 'c'})");
    }

    #[test]
    fn order_sensitive_equality() {
        let reordered: OrderedBidict<u32, char> = OrderedBidict::try_from_iter([(3, 'c'), (2, 'b'), (1, 'a')]).expect("Should build");
        assert_eq!(abc(), reordered);
        assert!(!abc().equals_ordered(&reordered));
        assert!(abc().equals_ordered(&abc()));
    }
}

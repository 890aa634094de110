//! The single write path shared by every mutating operation.
//!
//! `write` resolves collisions according to an [`OnDup`] policy and applies the
//! result to both tables at once. When a [`Journal`] is recording, every change is
//! logged so a failing bulk write can be rolled back exactly, including positions in
//! ordered tables.

use std::hash::Hash;

use crate::{
    error::BidictError,
    policy::{OnDup, OnDupAction},
    table::Table,
};

enum Undo<K, V, FS, IS> {
    Inserted { key: K, value: V },
    Evicted { key: K, value: V, fwd_slot: FS, inv_slot: IS },
    Replaced { key: K, old: V, new: V },
}

pub(crate) struct Journal<K, V, F: Table<K, V>, I: Table<V, K>> {
    records: Option<Vec<Undo<K, V, F::Slot, I::Slot>>>,
}

impl<K, V, F: Table<K, V>, I: Table<V, K>> Journal<K, V, F, I> {
    pub fn disabled() -> Self {
        Self { records: None }
    }

    pub fn recording() -> Self {
        Self { records: Some(Vec::new()) }
    }

    pub fn len(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    fn record(&mut self, build: impl FnOnce() -> Undo<K, V, F::Slot, I::Slot>) {
        if let Some(records) = self.records.as_mut() {
            records.push(build());
        }
    }
}

/// Writes `(key, value)` into `fwd`/`inv`.
///
/// Returns the value displaced from `key`, if the write replaced one. A write that is
/// ignored by policy, or that re-inserts an existing item, changes nothing and returns `None`.
pub(crate) fn write<K, V, F, I>(fwd: &mut F, inv: &mut I, key: K, value: V, on_dup: OnDup, journal: &mut Journal<K, V, F, I>) -> Result<Option<V>, BidictError<K, V>>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    let existing_value = fwd.get(&key).cloned();
    let existing_key = inv.get(&value).cloned();
    match (existing_value, existing_key) {
        (Some(old), _) if old == value => Ok(None),
        (Some(old), Some(other)) => match on_dup.kv {
            OnDupAction::Raise => Err(BidictError::KeyAndValueDuplicate { key, value }),
            OnDupAction::Ignore => Ok(None),
            OnDupAction::Overwrite => {
                log::trace!("[Bidict] evict item colliding on value while overwriting key");
                evict(fwd, inv, &other, journal);
                Ok(Some(replace(fwd, inv, key, old, value, journal)))
            }
        },
        (Some(old), None) => match on_dup.key {
            OnDupAction::Raise => Err(BidictError::KeyDuplicate { key, existing_value: old }),
            OnDupAction::Ignore => Ok(None),
            OnDupAction::Overwrite => Ok(Some(replace(fwd, inv, key, old, value, journal))),
        },
        (None, Some(other)) => match on_dup.val {
            OnDupAction::Raise => Err(BidictError::ValueDuplicate { value, existing_key: other }),
            OnDupAction::Ignore => Ok(None),
            OnDupAction::Overwrite => {
                log::trace!("[Bidict] evict item colliding on value");
                evict(fwd, inv, &other, journal);
                insert_new(fwd, inv, key, value, journal);
                Ok(None)
            }
        },
        (None, None) => {
            insert_new(fwd, inv, key, value, journal);
            Ok(None)
        }
    }
}

/// Removes `key` and its value from both tables.
pub(crate) fn remove<K, V, F, I>(fwd: &mut F, inv: &mut I, key: &K) -> Option<(K, V)>
where
    F: Table<K, V>,
    I: Table<V, K>,
{
    let (_, key, value) = fwd.remove(key)?;
    inv.remove(&value);
    Some((key, value))
}

/// Undoes every recorded change, newest first.
pub(crate) fn rollback<K, V, F, I>(fwd: &mut F, inv: &mut I, journal: Journal<K, V, F, I>)
where
    K: Clone,
    V: Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    let Some(records) = journal.records else {
        return;
    };
    for undo in records.into_iter().rev() {
        match undo {
            Undo::Inserted { key, value } => {
                fwd.remove(&key);
                inv.remove(&value);
            }
            Undo::Evicted { key, value, fwd_slot, inv_slot } => {
                fwd.restore(fwd_slot, key.clone(), value.clone());
                inv.restore(inv_slot, value, key);
            }
            Undo::Replaced { key, old, new } => {
                fwd.insert(key, old.clone());
                inv.replace_key(&new, old);
            }
        }
    }
}

fn evict<K, V, F, I>(fwd: &mut F, inv: &mut I, key: &K, journal: &mut Journal<K, V, F, I>)
where
    F: Table<K, V>,
    I: Table<V, K>,
{
    let Some((fwd_slot, key, value)) = fwd.remove(key) else {
        return;
    };
    if let Some((inv_slot, _, _)) = inv.remove(&value) {
        journal.record(|| Undo::Evicted { key, value, fwd_slot, inv_slot });
    }
}

fn replace<K, V, F, I>(fwd: &mut F, inv: &mut I, key: K, old: V, value: V, journal: &mut Journal<K, V, F, I>) -> V
where
    K: Clone,
    V: Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fwd.insert(key.clone(), value.clone());
    inv.replace_key(&old, value.clone());
    journal.record(|| Undo::Replaced {
        key,
        old: old.clone(),
        new: value,
    });
    old
}

fn insert_new<K, V, F, I>(fwd: &mut F, inv: &mut I, key: K, value: V, journal: &mut Journal<K, V, F, I>)
where
    K: Clone,
    V: Clone,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fwd.insert(key.clone(), value.clone());
    inv.insert(value.clone(), key.clone());
    journal.record(|| Undo::Inserted { key, value });
}

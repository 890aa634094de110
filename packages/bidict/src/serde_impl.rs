//! A bidict serializes as a plain map. Deserializing rejects any duplicate key or value
//! instead of silently dropping items.

use std::{fmt, hash::Hash, marker::PhantomData};

use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{bidict::Bidict, table::Table};

const MAX_PREALLOCATE: usize = 4096;

impl<K, V, F, I> Serialize for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone + Serialize,
    V: Hash + Eq + Clone + Serialize,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct BidictVisitor<K, V, F, I> {
    _marker: PhantomData<fn() -> Bidict<K, V, F, I>>,
}

impl<'de, K, V, F, I> Visitor<'de> for BidictVisitor<K, V, F, I>
where
    K: Hash + Eq + Clone + fmt::Debug + Deserialize<'de>,
    V: Hash + Eq + Clone + fmt::Debug + Deserialize<'de>,
    F: Table<K, V>,
    I: Table<V, K>,
{
    type Value = Bidict<K, V, F, I>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys and unique values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut bidict = Bidict::with_capacity(capacity);
        while let Some((key, value)) = access.next_entry()? {
            bidict.put(key, value).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(bidict)
    }
}

impl<'de, K, V, F, I> Deserialize<'de> for Bidict<K, V, F, I>
where
    K: Hash + Eq + Clone + fmt::Debug + Deserialize<'de>,
    V: Hash + Eq + Clone + fmt::Debug + Deserialize<'de>,
    F: Table<K, V>,
    I: Table<V, K>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BidictVisitor { _marker: PhantomData })
    }
}

use std::fmt::Debug;

/// Errors returned by fallible lookups and by writes whose duplication policy is `Raise`.
///
/// The duplicate variants carry the rejected item together with the part of the existing
/// item it collided with, so callers can report both sides.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BidictError<K, V> {
    #[display("key not found")]
    KeyNotFound,
    #[display("key {key:?} exists with value {existing_value:?}")]
    KeyDuplicate { key: K, existing_value: V },
    #[display("value {value:?} exists with key {existing_key:?}")]
    ValueDuplicate { value: V, existing_key: K },
    #[display("key {key:?} and value {value:?} both belong to other items")]
    KeyAndValueDuplicate { key: K, value: V },
}

impl<K, V> BidictError<K, V> {
    pub fn is_duplicate(&self) -> bool {
        !matches!(self, Self::KeyNotFound)
    }

    /// Same error seen from the inverse mapping, where keys and values trade places.
    pub fn inverted(self) -> BidictError<V, K> {
        match self {
            Self::KeyNotFound => BidictError::KeyNotFound,
            Self::KeyDuplicate { key, existing_value } => BidictError::ValueDuplicate {
                value: key,
                existing_key: existing_value,
            },
            Self::ValueDuplicate { value, existing_key } => BidictError::KeyDuplicate {
                key: value,
                existing_value: existing_key,
            },
            Self::KeyAndValueDuplicate { key, value } => BidictError::KeyAndValueDuplicate { key: value, value: key },
        }
    }
}

impl<K: Debug, V: Debug> std::error::Error for BidictError<K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_sides() {
        let err: BidictError<u32, &str> = BidictError::ValueDuplicate { value: "a", existing_key: 1 };
        assert_eq!(err.to_string(), "value \"a\" exists with key 1");

        let err: BidictError<u32, &str> = BidictError::KeyDuplicate { key: 2, existing_value: "b" };
        assert_eq!(err.to_string(), "key 2 exists with value \"b\"");
        assert_eq!(BidictError::<u32, u32>::KeyNotFound.to_string(), "key not found");
    }

    #[test]
    fn inverted_swaps_key_and_value_errors() {
        let err: BidictError<u32, &str> = BidictError::KeyDuplicate { key: 2, existing_value: "b" };
        assert_eq!(err.inverted(), BidictError::ValueDuplicate { value: 2, existing_key: "b" });

        let err: BidictError<u32, &str> = BidictError::KeyAndValueDuplicate { key: 2, value: "b" };
        assert_eq!(err.inverted(), BidictError::KeyAndValueDuplicate { key: "b", value: 2 });
        assert!(!BidictError::<u32, u32>::KeyNotFound.is_duplicate());
    }
}

/// Declares a newtype over [`Bidict`](crate::Bidict) whose lookups are named after the
/// domain instead of "key" and "value".
///
/// ```
/// bidict::named_bidict! {
///     /// Chemical symbols and element names.
///     pub struct ElementMap(String => String) {
///         fn name_for;
///         fn symbol_for;
///     }
/// }
///
/// let mut elements = ElementMap::new();
/// elements.insert("H".to_string(), "hydrogen".to_string()).unwrap();
/// assert_eq!(elements.name_for(&"H".to_string()).map(String::as_str), Some("hydrogen"));
/// assert_eq!(elements.symbol_for(&"hydrogen".to_string()).map(String::as_str), Some("H"));
/// ```
///
/// The first function looks up by key, the second by value. The rest of the
/// [`Bidict`](crate::Bidict) API is reachable through `Deref`/`DerefMut`.
///
/// The wrapped map is a plain `Bidict<K, V>` unless another layout is given with `as`:
///
/// ```
/// bidict::named_bidict! {
///     pub struct Ranking(u32 => String) as bidict::OrderedBidict<u32, String> {
///         fn player_at;
///         fn rank_of;
///     }
/// }
///
/// let mut ranking = Ranking::new();
/// ranking.insert(1, "ada".to_string()).unwrap();
/// assert_eq!(ranking.first(), Some((&1, &"ada".to_string())));
/// ```
#[macro_export]
macro_rules! named_bidict {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($key:ty => $value:ty) as $inner:ty {
            fn $value_for:ident;
            fn $key_for:ident;
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        $vis struct $name($inner);

        impl $name {
            pub fn new() -> Self {
                Self(<$inner>::new())
            }

            pub fn $value_for(&self, key: &$key) -> Option<&$value> {
                self.0.get(key)
            }

            pub fn $key_for(&self, value: &$value) -> Option<&$key> {
                self.0.get_by_value(value)
            }

            pub fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(inner: $inner) -> Self {
                Self(inner)
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($key:ty => $value:ty) {
            fn $value_for:ident;
            fn $key_for:ident;
        }
    ) => {
        $crate::named_bidict! {
            $(#[$meta])*
            $vis struct $name($key => $value) as $crate::Bidict<$key, $value> {
                fn $value_for;
                fn $key_for;
            }
        }
    };
}

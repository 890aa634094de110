//! Duplication policies decide what a write does when its key, its value, or both
//! already belong to an item in the map.

/// Action taken for one kind of collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum OnDupAction {
    /// Reject the write with a duplication error.
    #[default]
    Raise,
    /// Evict the existing item(s) and write the new one.
    Overwrite,
    /// Keep the existing item and silently drop the new one.
    Ignore,
}

/// Actions for the three collision kinds of a write `(k, v)`:
/// `key` when only `k` is present, `val` when only `v` is present,
/// `kv` when both are present in two different items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OnDup {
    pub key: OnDupAction,
    pub val: OnDupAction,
    pub kv: OnDupAction,
}

/// Plain map semantics for keys, while never silently dropping another key's value.
pub const ON_DUP_DEFAULT: OnDup = OnDup {
    key: OnDupAction::Overwrite,
    val: OnDupAction::Raise,
    kv: OnDupAction::Raise,
};

pub const ON_DUP_RAISE: OnDup = OnDup::all(OnDupAction::Raise);

pub const ON_DUP_OVERWRITE: OnDup = OnDup::all(OnDupAction::Overwrite);

impl OnDup {
    pub const fn all(action: OnDupAction) -> Self {
        Self { key: action, val: action, kv: action }
    }

    /// Whether a write under this policy can be rejected.
    pub const fn can_fail(&self) -> bool {
        matches!(self.key, OnDupAction::Raise) || matches!(self.val, OnDupAction::Raise) || matches!(self.kv, OnDupAction::Raise)
    }

    /// The same policy as seen from the inverse mapping.
    pub const fn swapped(self) -> Self {
        Self {
            key: self.val,
            val: self.key,
            kv: self.kv,
        }
    }
}

impl Default for OnDup {
    fn default() -> Self {
        ON_DUP_DEFAULT
    }
}

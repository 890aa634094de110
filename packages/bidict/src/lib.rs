//! One-to-one maps with lookup in both directions.
//!
//! A [`Bidict`] keeps a forward table (key to value) and an inverse table (value to
//! key) that are always exact transposes of each other. Writes that would associate a
//! key or a value with two items are resolved by a duplication policy ([`OnDup`]);
//! bulk writes are all-or-nothing.
//!
//! ```
//! use bidict::{Bidict, BidictError};
//!
//! let mut elements: Bidict<&str, &str> = Bidict::new();
//! elements.insert("H", "hydrogen")?;
//! assert_eq!(elements.inverse().get(&"hydrogen"), Some(&"H"));
//! assert!(matches!(elements.insert("X", "hydrogen"), Err(BidictError::ValueDuplicate { .. })));
//! # Ok::<(), BidictError<&str, &str>>(())
//! ```
//!
//! Maps are not synchronized: wrap them in a lock to share mutation across threads.

mod bidict;
mod error;
mod frozen;
mod inverse;
mod named;
mod ordered;
mod policy;
#[cfg(feature = "serde")]
mod serde_impl;
mod table;
mod util;
mod write;

pub use bidict::Bidict;
pub use error::BidictError;
pub use frozen::FrozenBidict;
pub use inverse::{Inverse, InverseMut};
pub use ordered::OrderedBidict;
pub use policy::{OnDup, OnDupAction, ON_DUP_DEFAULT, ON_DUP_OVERWRITE, ON_DUP_RAISE};
pub use table::Table;
pub use util::inverted;

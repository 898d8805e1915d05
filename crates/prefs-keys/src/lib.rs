//! Typed keys for the Prefs preference store.
//!
//! A [`Key<T>`] binds a string key name to the Rust type it is always read
//! and written as. Keys are plain constants; the "registry" is simply the set
//! of constants a program declares with [`register_key!`].
//!
//! Two traits translate between Rust values and [`RawValue`]s:
//!
//! - [`PrefValue`] -- element-level mapping (exact shape match, plus scalar
//!   bridging for top-level reads)
//! - [`Storable`] -- key-level mapping, including `Option<T>` keys where
//!   absence is a value and non-optional keys that fall back to a default
//!
//! Custom types are wired in with [`archived_value!`] (bincode archive in a
//! blob) or [`raw_representable!`] (enum stored as its raw scalar). URLs are
//! stored as strings; see [`location`].

pub mod archive;
pub mod error;
pub mod key;
pub mod location;
pub mod raw_enum;
pub mod storable;
pub mod value;

pub use error::{KeyError, KeyResult};
pub use key::{Key, KeyName};
pub use raw_enum::RawRepresentable;
pub use storable::Storable;
pub use value::PrefValue;

pub use prefs_types::{Blob, Date, Dict, RawKind, RawValue};
pub use url::Url;

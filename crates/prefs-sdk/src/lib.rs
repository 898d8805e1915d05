//! Typed access to the Prefs preference store.
//!
//! This is the main entry point for applications. [`Defaults`] wraps any
//! [`Store`] and offers two ways in:
//!
//! - dynamic access by string name, returning a [`Proxy`] with strict and
//!   defaulted accessors per type
//! - typed access through [`Key<T>`] constants declared with
//!   [`register_key!`], which always read and write the same `T`
//!
//! ```rust
//! use prefs_sdk::{register_key, Defaults};
//!
//! register_key!(const LAUNCH_COUNT: i64 = "launch_count");
//! register_key!(const USERNAME: Option<String> = "username");
//!
//! let defaults = Defaults::in_memory();
//! assert_eq!(defaults.get(&LAUNCH_COUNT), 0);
//! assert_eq!(defaults.get(&USERNAME), None);
//!
//! defaults.update(&LAUNCH_COUNT, |n| *n += 1).unwrap();
//! defaults.set(&USERNAME, Some("ada".to_string())).unwrap();
//!
//! assert_eq!(defaults.get(&LAUNCH_COUNT), 1);
//! assert_eq!(defaults.value("username").string().as_deref(), Some("ada"));
//! ```

pub mod defaults;
pub mod error;
pub mod proxy;

pub use defaults::Defaults;
pub use error::{SdkError, SdkResult};
pub use proxy::Proxy;

// Re-export key types
pub use prefs_keys::{
    archived_value, raw_representable, register_key, Key, KeyName, PrefValue, RawRepresentable,
    Storable, Url,
};
pub use prefs_store::{FileStoreConfig, InMemoryStore, JsonFileStore, Namespace, Store};
pub use prefs_types::{Blob, Date, Dict, RawKind, RawValue};

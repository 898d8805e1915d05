//! Store adapters for the Prefs preference store.
//!
//! A store is a flat, process-wide key-value namespace of [`RawValue`]s.
//! This crate defines the [`Store`] contract and ships two backends:
//!
//! - [`InMemoryStore`] -- `HashMap`-based store for tests and embedding
//! - [`JsonFileStore`] -- durable store persisting the namespace to one JSON file
//!
//! # Contract
//!
//! 1. `set` overwrites unconditionally; last writer wins.
//! 2. `put(key, None)` is the same as `remove(key)`.
//! 3. `remove` of an absent key is a no-op.
//! 4. `remove_all` clears the application namespace only; keys reserved by the
//!    [`Namespace`] survive.
//! 5. Stored data that is not a valid [`RawValue`] reads as absent.
//! 6. Backend I/O errors are propagated, never silently ignored.
//!
//! Stores add no coordination of their own. Concurrent read-modify-write
//! sequences from different handles or processes can lose updates.
//!
//! [`RawValue`]: prefs_types::RawValue

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod namespace;
pub mod traits;

pub use config::FileStoreConfig;
pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use namespace::Namespace;
pub use traits::Store;

use std::collections::HashMap;
use std::sync::Arc;

use prefs_types::RawValue;

use crate::error::StoreResult;

/// A persistent key-value preference store.
///
/// All implementations must satisfy these invariants:
/// - Keys are plain strings; the last write to a key wins.
/// - `get` returns `Ok(None)` both for unset keys and for stored data that
///   does not decode as a [`RawValue`].
/// - `remove_all` leaves keys reserved by the store's namespace in place.
/// - All I/O errors are propagated, never silently ignored.
pub trait Store: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<RawValue>>;

    /// Write `value` under `key`, replacing whatever was there.
    fn set(&self, key: &str, value: RawValue) -> StoreResult<()>;

    /// Remove `key`. Returns `true` if the key existed.
    fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Remove every key in the application namespace.
    ///
    /// Returns the number of keys removed. Reserved keys are kept, so the
    /// store is not necessarily empty afterwards.
    fn remove_all(&self) -> StoreResult<usize>;

    /// Snapshot of every readable entry, reserved keys included.
    ///
    /// No ordering is guaranteed.
    fn entries(&self) -> StoreResult<HashMap<String, RawValue>>;

    /// Check whether `get(key)` would return a value.
    fn has_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Write `Some(value)`, or remove the key on `None`.
    fn put(&self, key: &str, value: Option<RawValue>) -> StoreResult<()> {
        match value {
            Some(value) => self.set(key, value),
            None => self.remove(key).map(|_| ()),
        }
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<RawValue>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: RawValue) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        (**self).remove(key)
    }

    fn remove_all(&self) -> StoreResult<usize> {
        (**self).remove_all()
    }

    fn entries(&self) -> StoreResult<HashMap<String, RawValue>> {
        (**self).entries()
    }

    fn has_key(&self, key: &str) -> StoreResult<bool> {
        (**self).has_key(key)
    }
}

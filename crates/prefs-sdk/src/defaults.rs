use std::collections::{BTreeMap, HashMap};

use prefs_keys::{Key, KeyName, PrefValue, Storable};
use prefs_store::{FileStoreConfig, InMemoryStore, JsonFileStore, Store};
use prefs_types::RawValue;
use tracing::{debug, warn};

use crate::error::SdkResult;
use crate::proxy::Proxy;

/// Typed accessor facade over a preference [`Store`].
///
/// Create one handle per store and pass it to the code that needs it.
/// Reads never fail: a store error is logged at warn level and treated as
/// absence. Writes return [`SdkResult`] so I/O failures of durable backends
/// reach the caller.
///
/// # Read-modify-write
///
/// [`update`](Self::update), [`append`](Self::append),
/// [`insert_entry`](Self::insert_entry) and
/// [`remove_entry`](Self::remove_entry) read the whole value, change it in
/// memory, and write the whole value back. They are not atomic: two
/// concurrent updates of the same key (from two handles, threads sharing a
/// store, or two processes sharing a file) can lose one of the writes.
/// Callers that need atomic updates must serialize access themselves.
#[derive(Debug)]
pub struct Defaults<S: Store> {
    store: S,
}

impl Defaults<InMemoryStore> {
    /// Defaults backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl Defaults<JsonFileStore> {
    /// Defaults backed by the JSON file described by `config`.
    pub fn open_file(config: FileStoreConfig) -> SdkResult<Self> {
        Ok(Self::new(JsonFileStore::open(config)?))
    }
}

impl<S: Store> Defaults<S> {
    /// Defaults backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap into the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    // ---- Dynamic access ----

    /// Snapshot of whatever is stored under `key`.
    pub fn value<K: KeyName + ?Sized>(&self, key: &K) -> Proxy {
        Proxy::new(self.read(key.key_name()))
    }

    /// Store `value` under `key`, replacing the previous value.
    pub fn set_value<K: KeyName + ?Sized>(
        &self,
        key: &K,
        value: impl Into<RawValue>,
    ) -> SdkResult<()> {
        self.write(key.key_name(), Some(value.into()))
    }

    /// Store `value` under `key`, or remove the key on `None`.
    pub fn set_raw<K: KeyName + ?Sized>(&self, key: &K, value: Option<RawValue>) -> SdkResult<()> {
        self.write(key.key_name(), value)
    }

    // ---- Typed access ----

    /// Read `key` as its declared type.
    ///
    /// For non-optional keys, an absent or unreadable value yields the key's
    /// fallback. The fallback is not written back to the store.
    pub fn get<T: Storable>(&self, key: &Key<T>) -> T {
        let raw = self.read(key.name());
        T::decode(raw.as_ref()).unwrap_or_else(|| key.fallback())
    }

    /// Write `value` under `key`. An optional key set to `None` is removed.
    pub fn set<T: Storable>(&self, key: &Key<T>, value: impl Into<T>) -> SdkResult<()> {
        let raw = value.into().encode()?;
        self.write(key.name(), raw)
    }

    // ---- Key operations ----

    /// Returns `true` if a readable value is stored under `key`.
    pub fn has_key<K: KeyName + ?Sized>(&self, key: &K) -> bool {
        let name = key.key_name();
        match self.store.has_key(name) {
            Ok(present) => present,
            Err(e) => {
                warn!(key = name, error = %e, "failed to check key, treating as absent");
                false
            }
        }
    }

    /// Remove `key`. Returns `true` if it was present.
    pub fn remove<K: KeyName + ?Sized>(&self, key: &K) -> SdkResult<bool> {
        let name = key.key_name();
        let removed = self.store.remove(name)?;
        debug!(key = name, removed, "removed key");
        Ok(removed)
    }

    /// Remove every key in the application namespace.
    ///
    /// Keys reserved by the store's namespace survive, so the store is not
    /// necessarily empty afterwards. Returns the number of keys removed.
    pub fn remove_all(&self) -> SdkResult<usize> {
        let removed = self.store.remove_all()?;
        debug!(removed, "removed all application keys");
        Ok(removed)
    }

    /// Snapshot of every stored entry, reserved keys included.
    pub fn all_entries(&self) -> HashMap<String, RawValue> {
        self.store.entries().unwrap_or_else(|e| {
            warn!(error = %e, "failed to list entries, treating store as empty");
            HashMap::new()
        })
    }

    // ---- Read-modify-write ----

    /// Read `key` (or its fallback), apply `f`, and write the result back.
    ///
    /// Not atomic; see the type-level docs.
    pub fn update<T, R>(&self, key: &Key<T>, f: impl FnOnce(&mut T) -> R) -> SdkResult<R>
    where
        T: Storable,
    {
        let mut value = self.get(key);
        let out = f(&mut value);
        self.set(key, value)?;
        Ok(out)
    }

    /// Append `item` to the array stored under `key`.
    ///
    /// An absent or unreadable array is treated as empty, so the stored
    /// value afterwards is exactly `[item]` in that case.
    pub fn append<V: PrefValue>(&self, key: &Key<Vec<V>>, item: V) -> SdkResult<()> {
        self.update(key, |items| items.push(item))
    }

    /// Insert `value` under `entry` in the map stored under `key`.
    ///
    /// Returns the previous value of the entry.
    pub fn insert_entry<V: PrefValue>(
        &self,
        key: &Key<BTreeMap<String, V>>,
        entry: impl Into<String>,
        value: V,
    ) -> SdkResult<Option<V>> {
        self.update(key, |map| map.insert(entry.into(), value))
    }

    /// Remove `entry` from the map stored under `key`, keeping the others.
    pub fn remove_entry<V: PrefValue>(
        &self,
        key: &Key<BTreeMap<String, V>>,
        entry: &str,
    ) -> SdkResult<Option<V>> {
        self.update(key, |map| map.remove(entry))
    }

    // ---- Store plumbing ----

    fn read(&self, key: &str) -> Option<RawValue> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read key, treating as absent");
                None
            }
        }
    }

    fn write(&self, key: &str, value: Option<RawValue>) -> SdkResult<()> {
        match &value {
            Some(v) => debug!(key, kind = %v.kind(), "writing key"),
            None => debug!(key, "clearing key"),
        }
        self.store.put(key, value)?;
        Ok(())
    }
}

impl Default for Defaults<InMemoryStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

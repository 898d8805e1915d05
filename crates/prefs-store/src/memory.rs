use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use prefs_types::RawValue;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::namespace::Namespace;
use crate::traits::Store;

/// In-memory, HashMap-based preference store.
///
/// Intended for tests and embedding. Entries are held behind a `RwLock` and
/// cloned on read. Data is lost when the store is dropped.
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, RawValue>>,
    namespace: Namespace,
}

impl InMemoryStore {
    /// Create a new empty store that owns every key.
    pub fn new() -> Self {
        Self::with_namespace(Namespace::default())
    }

    /// Create a new empty store with the given namespace policy.
    pub fn with_namespace(namespace: Namespace) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            namespace,
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Number of entries currently stored, reserved keys included.
    pub fn len(&self) -> usize {
        self.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, RawValue>>> {
        self.entries.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, RawValue>>> {
        self.entries.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for InMemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<RawValue>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: RawValue) -> StoreResult<()> {
        debug!(key, kind = %value.kind(), "set");
        self.write()?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let existed = self.write()?.remove(key).is_some();
        if existed {
            debug!(key, "removed");
        }
        Ok(existed)
    }

    fn remove_all(&self) -> StoreResult<usize> {
        let mut map = self.write()?;
        let before = map.len();
        map.retain(|key, _| self.namespace.is_reserved(key));
        let removed = before - map.len();
        debug!(removed, kept = map.len(), "removed all application keys");
        Ok(removed)
    }

    fn entries(&self) -> StoreResult<HashMap<String, RawValue>> {
        Ok(self.read()?.clone())
    }

    fn has_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.read()?.contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("entry_count", &self.len())
            .field("namespace", &self.namespace)
            .finish()
    }
}

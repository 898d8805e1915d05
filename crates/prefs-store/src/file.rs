//! Durable store backed by a single JSON file.
//!
//! On-disk format: one JSON object mapping each key to its tagged
//! [`RawValue`] form.
//!
//! ```text
//! {
//!   "launch_count": { "int": 3 },
//!   "last_seen":    { "date": "2024-05-01T10:00:00Z" },
//!   "avatar":       { "blob": "89504e47" }
//! }
//! ```
//!
//! The file is loaded on open and reads are served from that view. Every
//! mutation re-reads the file, applies the change to what is on disk, and
//! writes the result through a temporary file in the same directory that is
//! then renamed over the existing file, so readers never observe a
//! half-written file. Writers do not take a file lock, so two writers
//! landing between one re-read and its rename can still lose an update.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use prefs_types::RawValue;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::FileStoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::namespace::Namespace;
use crate::traits::Store;

/// Preference store persisting its namespace to a JSON file.
///
/// Entries are kept in memory as raw JSON. A stored entry that does not
/// decode as a [`RawValue`] (written by another tool, or by an older
/// program) reads as absent and is left on disk untouched until the key is
/// overwritten or removed.
pub struct JsonFileStore {
    config: FileStoreConfig,
    entries: RwLock<Map<String, Value>>,
}

impl JsonFileStore {
    /// Open (or create on first write) the store described by `config`.
    pub fn open(config: FileStoreConfig) -> StoreResult<Self> {
        let entries = load(&config.path)?;
        info!(path = %config.path.display(), entries = entries.len(), "opened file store");
        Ok(Self {
            config,
            entries: RwLock::new(entries),
        })
    }

    /// Open a store at `path` with default settings.
    pub fn open_path(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open(FileStoreConfig::at(path))
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn namespace(&self) -> &Namespace {
        &self.config.reserved_prefixes
    }

    /// Discard the in-memory view and re-read the file.
    ///
    /// Picks up keys written through other handles or processes. Writes
    /// already merge into the current file, so this only refreshes reads.
    pub fn reload(&self) -> StoreResult<()> {
        let fresh = load(&self.config.path)?;
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        *entries = fresh;
        debug!(entries = entries.len(), "reloaded file store");
        Ok(())
    }

    /// Re-read the file, apply `f` to its entries, persist them, then publish.
    ///
    /// The file is skipped when `f` changes nothing. If loading or persisting
    /// fails the in-memory view is left as it was.
    fn mutate<R>(&self, f: impl FnOnce(&mut Map<String, Value>) -> R) -> StoreResult<R> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        let fresh = load(&self.config.path)?;
        let mut next = fresh.clone();
        let result = f(&mut next);
        if next != fresh {
            self.persist(&next)?;
        }
        *entries = next;
        Ok(result)
    }

    fn persist(&self, entries: &Map<String, Value>) -> StoreResult<()> {
        let path = &self.config.path;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(entries)
        } else {
            serde_json::to_vec(entries)
        }
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.flush()?;
        if self.config.sync_on_write {
            tmp.as_file().sync_all()?;
        }
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;

        debug!(path = %path.display(), len = bytes.len(), "persisted file store");
        Ok(())
    }
}

fn load(path: &Path) -> StoreResult<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::CorruptFile {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
        Err(e) => Err(StoreError::CorruptFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn decode(key: &str, value: &Value) -> Option<RawValue> {
    match serde_json::from_value::<RawValue>(value.clone()) {
        Ok(raw) => Some(raw),
        Err(e) => {
            warn!(key, error = %e, "stored entry is not a plain value; treating as absent");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<RawValue>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).and_then(|value| decode(key, value)))
    }

    fn set(&self, key: &str, value: RawValue) -> StoreResult<()> {
        let kind = value.kind();
        let json =
            serde_json::to_value(&value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.mutate(|entries| {
            entries.insert(key.to_string(), json);
        })?;
        debug!(key, %kind, "set");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let existed = self.mutate(|entries| entries.remove(key).is_some())?;
        if existed {
            debug!(key, "removed");
        }
        Ok(existed)
    }

    fn remove_all(&self) -> StoreResult<usize> {
        let namespace = &self.config.reserved_prefixes;
        let removed = self.mutate(|entries| {
            let before = entries.len();
            entries.retain(|key, _| namespace.is_reserved(key));
            before - entries.len()
        })?;
        debug!(removed, "removed all application keys");
        Ok(removed)
    }

    fn entries(&self) -> StoreResult<HashMap<String, RawValue>> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries
            .iter()
            .filter_map(|(key, value)| decode(key, value).map(|raw| (key.clone(), raw)))
            .collect())
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.config.path)
            .finish()
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::namespace::Namespace;

/// Configuration for a [`JsonFileStore`](crate::JsonFileStore).
///
/// Can be built in code or loaded from TOML:
///
/// ```toml
/// path = "/home/me/.config/myapp/prefs.json"
/// reserved_prefixes = ["NS", "Apple"]
/// pretty = true
/// sync_on_write = false
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileStoreConfig {
    /// Location of the JSON file holding the whole namespace.
    pub path: PathBuf,
    /// Key prefixes owned by the system; `remove_all` keeps them.
    pub reserved_prefixes: Namespace,
    /// Pretty-print the file so it stays readable by hand.
    pub pretty: bool,
    /// `fsync` the file after every write.
    pub sync_on_write: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("prefs.json"),
            reserved_prefixes: Namespace::default(),
            pretty: true,
            sync_on_write: false,
        }
    }
}

impl FileStoreConfig {
    /// Default configuration storing to `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        toml::from_str(s).map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

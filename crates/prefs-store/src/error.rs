use std::path::PathBuf;

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The persisted store file exists but is not a JSON object.
    #[error("corrupt store file {path}: {reason}")]
    CorruptFile { path: PathBuf, reason: String },

    /// The store configuration could not be parsed.
    #[error("invalid store config: {0}")]
    Config(String),

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

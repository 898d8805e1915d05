use thiserror::Error;

/// Errors from converting typed values into stored form.
#[derive(Debug, Error)]
pub enum KeyError {
    /// A value could not be archived into a blob.
    #[error("failed to archive {type_name}: {reason}")]
    Archive {
        type_name: &'static str,
        reason: String,
    },
}

/// Result alias for key operations.
pub type KeyResult<T> = Result<T, KeyError>;

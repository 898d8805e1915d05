use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("store error: {0}")]
    Store(#[from] prefs_store::StoreError),

    #[error("key error: {0}")]
    Key(#[from] prefs_keys::KeyError),
}

pub type SdkResult<T> = Result<T, SdkError>;

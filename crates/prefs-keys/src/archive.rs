//! Archiving of arbitrary serde types into blobs.
//!
//! Types with no natural [`RawValue`] shape (structs, enums with associated
//! data) are stored as a bincode archive inside a [`Blob`]. Decoding a blob
//! that was not produced by the matching encoder fails cleanly and reads as
//! absent; trailing bytes are rejected so that a blob written for a
//! different type is less likely to be misread.
//!
//! Use [`archived_value!`](crate::archived_value) to make a type usable as a
//! key value.

use bincode::Options;
use prefs_types::{Blob, RawValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{KeyError, KeyResult};

/// Make serde types storable as archived blobs.
///
/// Implements [`PrefValue`](crate::PrefValue) and [`Storable`](crate::Storable)
/// for each listed type. The type must implement `Serialize`,
/// `DeserializeOwned` and `Default` (the fallback for non-optional keys).
///
/// # Example
/// ```rust
/// use prefs_keys::{archived_value, register_key, PrefValue, Storable};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
/// struct Window {
///     width: u32,
///     height: u32,
/// }
///
/// archived_value!(Window);
/// register_key!(const MAIN_WINDOW: Window = "main_window");
///
/// let raw = Window { width: 800, height: 600 }.to_raw().unwrap();
/// assert_eq!(Window::from_raw(&raw), Some(Window { width: 800, height: 600 }));
/// assert_eq!(Window::decode(None), None);
/// ```
#[macro_export]
macro_rules! archived_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::PrefValue for $ty {
            fn to_raw(&self) -> $crate::KeyResult<$crate::RawValue> {
                $crate::archive::encode(self).map($crate::RawValue::Blob)
            }

            fn from_raw(raw: &$crate::RawValue) -> ::std::option::Option<Self> {
                $crate::archive::decode(raw)
            }
        }

        $crate::__impl_storable!($ty);
    )+};
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Archive `value` into a blob.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> KeyResult<Blob> {
    options()
        .serialize(value)
        .map(Blob::new)
        .map_err(|e| KeyError::Archive {
            type_name: std::any::type_name::<T>(),
            reason: e.to_string(),
        })
}

/// Unarchive a `T` from a stored blob.
///
/// Returns `None` (and logs at debug level) when `raw` is not a blob or the
/// blob does not decode as a `T`.
pub fn decode<T: DeserializeOwned>(raw: &RawValue) -> Option<T> {
    let Some(blob) = raw.as_blob() else {
        debug!(
            type_name = std::any::type_name::<T>(),
            kind = %raw.kind(),
            "archived value is not a blob"
        );
        return None;
    };

    match options().deserialize(blob.as_bytes()) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(
                type_name = std::any::type_name::<T>(),
                len = blob.len(),
                error = %e,
                "failed to unarchive value"
            );
            None
        }
    }
}

//! Key-level mapping: how a whole key's value is read and written.

use std::collections::BTreeMap;

use prefs_types::{Blob, Date, RawValue};

use crate::error::KeyResult;
use crate::value::PrefValue;

/// A type that can be the value type `T` of a [`Key<T>`](crate::Key).
///
/// `decode` returns `None` when nothing usable is stored; the caller then
/// substitutes the key's fallback (its declared default, else
/// `Default::default()`). `Option<V>` never returns `None` from `decode`:
/// for optional keys absence *is* the value.
///
/// `encode` returning `None` means "remove the key".
pub trait Storable: Default {
    fn decode(raw: Option<&RawValue>) -> Option<Self>;

    fn encode(&self) -> KeyResult<Option<RawValue>>;
}

/// Implement [`Storable`] for non-optional [`PrefValue`] types.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_storable {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Storable for $ty {
            fn decode(raw: ::std::option::Option<&$crate::RawValue>) -> ::std::option::Option<Self> {
                raw.and_then(<$ty as $crate::PrefValue>::coerce)
            }

            fn encode(&self) -> $crate::KeyResult<::std::option::Option<$crate::RawValue>> {
                $crate::PrefValue::to_raw(self).map(::std::option::Option::Some)
            }
        }
    )+};
}

crate::__impl_storable!(String, i64, i32, u32, f64, bool, Blob, Date);

impl<V: PrefValue> Storable for Vec<V> {
    fn decode(raw: Option<&RawValue>) -> Option<Self> {
        raw.and_then(<Self as PrefValue>::coerce)
    }

    fn encode(&self) -> KeyResult<Option<RawValue>> {
        self.to_raw().map(Some)
    }
}

impl<V: PrefValue> Storable for BTreeMap<String, V> {
    fn decode(raw: Option<&RawValue>) -> Option<Self> {
        raw.and_then(<Self as PrefValue>::coerce)
    }

    fn encode(&self) -> KeyResult<Option<RawValue>> {
        self.to_raw().map(Some)
    }
}

impl<V: PrefValue> Storable for Option<V> {
    fn decode(raw: Option<&RawValue>) -> Option<Self> {
        Some(raw.and_then(V::coerce))
    }

    fn encode(&self) -> KeyResult<Option<RawValue>> {
        self.as_ref().map(V::to_raw).transpose()
    }
}

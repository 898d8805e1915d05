//! Element-level mapping between Rust values and [`RawValue`]s.

use std::collections::BTreeMap;

use prefs_types::{Blob, Date, RawValue};

use crate::error::KeyResult;

/// A type with a stored representation.
///
/// `from_raw` is an exact shape match and is what collections use for their
/// elements, so a stored `[1, "foo"]` is never a `Vec<String>`. `coerce` is
/// the lenient read used for a value stored directly under a key; scalars
/// override it to apply string/number/bool bridging.
pub trait PrefValue: Sized {
    /// Convert into stored form.
    fn to_raw(&self) -> KeyResult<RawValue>;

    /// Read a value whose stored shape matches exactly.
    fn from_raw(raw: &RawValue) -> Option<Self>;

    /// Read a value stored directly under a key.
    fn coerce(raw: &RawValue) -> Option<Self> {
        Self::from_raw(raw)
    }
}

impl PrefValue for String {
    fn to_raw(&self) -> KeyResult<RawValue> {
        Ok(RawValue::String(self.clone()))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_str().map(str::to_string)
    }

    fn coerce(raw: &RawValue) -> Option<Self> {
        raw.coerce_string()
    }
}

impl PrefValue for i64 {
    fn to_raw(&self) -> KeyResult<RawValue> {
        Ok(RawValue::Int(*self))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    fn coerce(raw: &RawValue) -> Option<Self> {
        raw.coerce_int()
    }
}

// Narrow integers are stored as `Int` and read back only when in range.
macro_rules! narrow_int {
    ($($ty:ty),+) => {$(
        impl PrefValue for $ty {
            fn to_raw(&self) -> KeyResult<RawValue> {
                Ok(RawValue::Int(i64::from(*self)))
            }

            fn from_raw(raw: &RawValue) -> Option<Self> {
                i64::from_raw(raw).and_then(|n| <$ty>::try_from(n).ok())
            }

            fn coerce(raw: &RawValue) -> Option<Self> {
                raw.coerce_int().and_then(|n| <$ty>::try_from(n).ok())
            }
        }
    )+};
}

narrow_int!(i32, u32);

impl PrefValue for f64 {
    fn to_raw(&self) -> KeyResult<RawValue> {
        Ok(RawValue::Double(*self))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    fn coerce(raw: &RawValue) -> Option<Self> {
        raw.coerce_double()
    }
}

impl PrefValue for bool {
    fn to_raw(&self) -> KeyResult<RawValue> {
        Ok(RawValue::Bool(*self))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn coerce(raw: &RawValue) -> Option<Self> {
        raw.coerce_bool()
    }
}

impl PrefValue for Blob {
    fn to_raw(&self) -> KeyResult<RawValue> {
        Ok(RawValue::Blob(self.clone()))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_blob().cloned()
    }
}

impl PrefValue for Date {
    fn to_raw(&self) -> KeyResult<RawValue> {
        Ok(RawValue::Date(*self))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_date().copied()
    }
}

impl PrefValue for RawValue {
    fn to_raw(&self) -> KeyResult<RawValue> {
        Ok(self.clone())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        Some(raw.clone())
    }
}

/// All-or-nothing: one mismatched element makes the whole array unreadable.
impl<V: PrefValue> PrefValue for Vec<V> {
    fn to_raw(&self) -> KeyResult<RawValue> {
        self.iter()
            .map(V::to_raw)
            .collect::<KeyResult<Vec<_>>>()
            .map(RawValue::Array)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_array()?.iter().map(V::from_raw).collect()
    }
}

/// All-or-nothing over the map's values, like `Vec<V>`.
impl<V: PrefValue> PrefValue for BTreeMap<String, V> {
    fn to_raw(&self) -> KeyResult<RawValue> {
        self.iter()
            .map(|(k, v)| Ok((k.clone(), v.to_raw()?)))
            .collect::<KeyResult<BTreeMap<_, _>>>()
            .map(RawValue::Map)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_map()?
            .iter()
            .map(|(k, v)| V::from_raw(v).map(|v| (k.clone(), v)))
            .collect()
    }
}

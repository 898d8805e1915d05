//! Enumerations stored as a raw scalar.
//!
//! A fieldless enum backed by an integer or a string is stored as that raw
//! scalar rather than archived, so other tools reading the store see a
//! plain value. A stored scalar that maps to no case reads as absent, and a
//! non-optional key then falls back to its default case.

use prefs_types::RawValue;
use tracing::debug;

use crate::value::PrefValue;

/// A type with a one-to-one mapping onto a raw scalar.
///
/// # Example
/// ```rust
/// use prefs_keys::{raw_representable, PrefValue, RawRepresentable, RawValue};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq)]
/// enum Volume {
///     #[default]
///     Ten,
///     Twenty,
/// }
///
/// impl RawRepresentable for Volume {
///     type Raw = i64;
///
///     fn raw_value(&self) -> i64 {
///         match self {
///             Self::Ten => 10,
///             Self::Twenty => 20,
///         }
///     }
///
///     fn from_raw_value(raw: i64) -> Option<Self> {
///         match raw {
///             10 => Some(Self::Ten),
///             20 => Some(Self::Twenty),
///             _ => None,
///         }
///     }
/// }
///
/// raw_representable!(Volume);
///
/// assert_eq!(Volume::Twenty.to_raw().unwrap(), RawValue::Int(20));
/// assert_eq!(Volume::from_raw(&RawValue::Int(30)), None);
/// ```
pub trait RawRepresentable: Sized {
    /// The scalar type the cases are stored as.
    type Raw: PrefValue;

    fn raw_value(&self) -> Self::Raw;

    /// The case for `raw`, or `None` if no case maps to it.
    fn from_raw_value(raw: Self::Raw) -> Option<Self>;
}

/// Make [`RawRepresentable`] types storable as their raw scalar.
///
/// Implements [`PrefValue`](crate::PrefValue) and [`Storable`](crate::Storable)
/// for each listed type. The type must also implement `Default`, which names
/// the fallback case for non-optional keys.
#[macro_export]
macro_rules! raw_representable {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::PrefValue for $ty {
            fn to_raw(&self) -> $crate::KeyResult<$crate::RawValue> {
                $crate::PrefValue::to_raw(&$crate::RawRepresentable::raw_value(self))
            }

            fn from_raw(raw: &$crate::RawValue) -> ::std::option::Option<Self> {
                $crate::raw_enum::case_from_raw(raw)
            }

            fn coerce(raw: &$crate::RawValue) -> ::std::option::Option<Self> {
                $crate::raw_enum::case_from_coerced(raw)
            }
        }

        $crate::__impl_storable!($ty);
    )+};
}

/// The case stored as exactly `raw`.
pub fn case_from_raw<T: RawRepresentable>(raw: &RawValue) -> Option<T> {
    <T::Raw as PrefValue>::from_raw(raw).and_then(lookup::<T>)
}

/// The case for `raw` after scalar bridging (`"10"` finds the case for `10`).
pub fn case_from_coerced<T: RawRepresentable>(raw: &RawValue) -> Option<T> {
    <T::Raw as PrefValue>::coerce(raw).and_then(lookup::<T>)
}

fn lookup<T: RawRepresentable>(raw: T::Raw) -> Option<T> {
    let case = T::from_raw_value(raw);
    if case.is_none() {
        debug!(
            type_name = std::any::type_name::<T>(),
            "stored raw value matches no case"
        );
    }
    case
}

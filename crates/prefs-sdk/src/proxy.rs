use prefs_types::coerce::{parse_double_lenient, parse_int_lenient};
use prefs_types::{Blob, Date, Dict, RawValue};

/// The value read for one key at the moment of access.
///
/// A proxy is a snapshot: it is built on each [`Defaults::value`] call and
/// never reflects later writes.
///
/// Strict accessors (`string`, `int`, ...) return `None` unless the stored
/// value has a matching shape or bridges to it (see
/// [`prefs_types::coerce`]). Defaulted accessors (`string_value`, ...) never
/// fail and return the type's zero value instead.
///
/// [`Defaults::value`]: crate::Defaults::value
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Proxy {
    value: Option<RawValue>,
}

impl Proxy {
    /// Wrap a value read from a store.
    pub fn new(value: Option<RawValue>) -> Self {
        Self { value }
    }

    /// Returns `true` if a value was stored.
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if nothing was stored.
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// The stored value, uncoerced.
    pub fn raw(&self) -> Option<&RawValue> {
        self.value.as_ref()
    }

    /// Unwrap into the stored value, uncoerced.
    pub fn into_raw(self) -> Option<RawValue> {
        self.value
    }

    // ---- Strict accessors ----

    /// String read. Numbers and bools bridge to their text form.
    pub fn string(&self) -> Option<String> {
        self.value.as_ref()?.coerce_string()
    }

    /// Integer read. A stored string must be an integer literal.
    pub fn int(&self) -> Option<i64> {
        self.value.as_ref()?.coerce_int()
    }

    /// Double read. A stored string must be an integer literal, so `"3.14"`
    /// is `None` here; use [`double_value`](Self::double_value) to parse it.
    pub fn double(&self) -> Option<f64> {
        self.value.as_ref()?.coerce_double()
    }

    /// Bool read. Numbers are `true` unless zero; strings never bridge.
    pub fn bool(&self) -> Option<bool> {
        self.value.as_ref()?.coerce_bool()
    }

    /// The stored blob. No bridging.
    pub fn blob(&self) -> Option<&Blob> {
        self.value.as_ref()?.as_blob()
    }

    /// The stored date. No bridging.
    pub fn date(&self) -> Option<Date> {
        self.value.as_ref()?.as_date().copied()
    }

    /// The stored array. No bridging.
    pub fn array(&self) -> Option<&[RawValue]> {
        self.value.as_ref()?.as_array()
    }

    /// The stored dictionary. No bridging.
    pub fn dictionary(&self) -> Option<&Dict> {
        self.value.as_ref()?.as_map()
    }

    // ---- Defaulted accessors ----

    /// [`string`](Self::string), or `""`.
    pub fn string_value(&self) -> String {
        self.string().unwrap_or_default()
    }

    /// Best-effort integer: also parses decimal strings, truncating toward
    /// zero (`"3.14"` reads as 3).
    pub fn int_value(&self) -> i64 {
        self.value.as_ref().and_then(parse_int_lenient).unwrap_or(0)
    }

    /// Best-effort double: also parses decimal strings.
    pub fn double_value(&self) -> f64 {
        self.value.as_ref().and_then(parse_double_lenient).unwrap_or(0.0)
    }

    /// [`bool`](Self::bool), or `false`.
    pub fn bool_value(&self) -> bool {
        self.bool().unwrap_or(false)
    }

    /// [`blob`](Self::blob), or an empty blob.
    pub fn blob_value(&self) -> Blob {
        self.blob().cloned().unwrap_or_default()
    }

    /// [`array`](Self::array), or an empty array.
    pub fn array_value(&self) -> Vec<RawValue> {
        self.array().map(<[RawValue]>::to_vec).unwrap_or_default()
    }

    /// [`dictionary`](Self::dictionary), or an empty dictionary.
    pub fn dictionary_value(&self) -> Dict {
        self.dictionary().cloned().unwrap_or_default()
    }
}

impl From<Option<RawValue>> for Proxy {
    fn from(value: Option<RawValue>) -> Self {
        Self::new(value)
    }
}

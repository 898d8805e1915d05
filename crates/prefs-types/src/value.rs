use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blob::Blob;

/// UTC timestamp stored under a key.
pub type Date = DateTime<Utc>;

/// Heterogeneous string-keyed map, the shape of a stored dictionary.
pub type Dict = BTreeMap<String, RawValue>;

/// The shape of a [`RawValue`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawKind {
    String,
    Int,
    Double,
    Bool,
    Blob,
    Date,
    Array,
    Map,
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "int"),
            Self::Double => write!(f, "double"),
            Self::Bool => write!(f, "bool"),
            Self::Blob => write!(f, "blob"),
            Self::Date => write!(f, "date"),
            Self::Array => write!(f, "array"),
            Self::Map => write!(f, "map"),
        }
    }
}

/// A value as persisted by a preference store.
///
/// This is a closed set: anything a store holds that does not fit one of
/// these shapes is reported as absent. Arrays and maps nest arbitrarily.
///
/// The serialized form carries an explicit tag per value
/// (`{"int": 1}`, `{"double": 1.0}`, `{"date": "..."}`, `{"blob": "<hex>"}`)
/// so text-based stores keep every variant distinct on reload. Non-finite
/// doubles are written as `{"double": "NaN"}`, `"inf"` or `"-inf"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawValue {
    String(String),
    Int(i64),
    #[serde(with = "double_repr")]
    Double(f64),
    Bool(bool),
    Blob(Blob),
    Date(Date),
    Array(Vec<RawValue>),
    Map(Dict),
}

// JSON has no literal for NaN or the infinities, so those travel as strings.
mod double_repr {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    const NAN: &str = "NaN";
    const INF: &str = "inf";
    const NEG_INF: &str = "-inf";

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value.is_sign_positive() {
            serializer.serialize_str(INF)
        } else {
            serializer.serialize_str(NEG_INF)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Special(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(d) => Ok(d),
            Repr::Special(s) => match s.as_str() {
                NAN => Ok(f64::NAN),
                INF => Ok(f64::INFINITY),
                NEG_INF => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"a number, \"NaN\", \"inf\" or \"-inf\"",
                )),
            },
        }
    }
}

impl RawValue {
    /// The shape tag of this value.
    pub fn kind(&self) -> RawKind {
        match self {
            Self::String(_) => RawKind::String,
            Self::Int(_) => RawKind::Int,
            Self::Double(_) => RawKind::Double,
            Self::Bool(_) => RawKind::Bool,
            Self::Blob(_) => RawKind::Blob,
            Self::Date(_) => RawKind::Date,
            Self::Array(_) => RawKind::Array,
            Self::Map(_) => RawKind::Map,
        }
    }

    /// Returns `true` for string, int, double and bool values.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::String(_) | Self::Int(_) | Self::Double(_) | Self::Bool(_)
        )
    }

    /// The string payload, without coercion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The blob payload, if this is a blob.
    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            Self::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// The date payload, if this is a date.
    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[RawValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is a map.
    pub fn as_map(&self) -> Option<&Dict> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Blob> for RawValue {
    fn from(value: Blob) -> Self {
        Self::Blob(value)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(Blob::new(value))
    }
}

impl From<Date> for RawValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(value: Vec<RawValue>) -> Self {
        Self::Array(value)
    }
}

impl From<Dict> for RawValue {
    fn from(value: Dict) -> Self {
        Self::Map(value)
    }
}

//! Foundation types for the Prefs preference store.
//!
//! Every value that crosses the store boundary is a [`RawValue`]: a closed
//! variant over the plain shapes a host preference store can persist. All
//! other Prefs crates depend on `prefs-types`.
//!
//! # Key Types
//!
//! - [`RawValue`] -- the only representation a store persists or returns
//! - [`RawKind`] -- shape tag used for diagnostics
//! - [`Blob`] -- opaque byte payload (hex-encoded when serialized)
//! - [`Date`] -- UTC timestamp
//!
//! Scalar bridging (string/int/double/bool conversions) lives on
//! [`RawValue`] in the [`coerce`] module.

pub mod blob;
pub mod coerce;
pub mod error;
pub mod value;

pub use blob::Blob;
pub use error::TypeError;
pub use value::{Date, Dict, RawKind, RawValue};

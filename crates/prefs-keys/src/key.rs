//! Typed key descriptors.

use std::fmt;

use crate::storable::Storable;

/// Declare a typed key constant.
///
/// This is the usual way to create keys. It binds a key name to a value
/// type once, so every call site reads and writes the same type.
///
/// # Example
/// ```rust
/// use prefs_keys::{register_key, Key};
///
/// register_key!(pub const LAUNCH_COUNT: i64 = "launch_count");
/// register_key!(pub const NICKNAME: Option<String> = "nickname");
///
/// fn default_volume() -> f64 { 0.8 }
/// register_key!(pub const VOLUME: f64 = "volume", default = default_volume);
///
/// assert_eq!(LAUNCH_COUNT.name(), "launch_count");
/// assert_eq!(VOLUME.fallback(), 0.8);
/// ```
#[macro_export]
macro_rules! register_key {
    ($(#[$meta:meta])* $vis:vis const $name:ident: $ty:ty = $key:literal) => {
        $(#[$meta])*
        $vis const $name: $crate::Key<$ty> = $crate::Key::new($key);
    };
    ($(#[$meta:meta])* $vis:vis const $name:ident: $ty:ty = $key:literal, default = $default:expr) => {
        $(#[$meta])*
        $vis const $name: $crate::Key<$ty> = $crate::Key::with_default($key, $default);
    };
}

/// Type-safe key into a preference store.
///
/// Associates a key name with a value type at compile time. `Key<Option<T>>`
/// treats absence as `None`; any other `Key<T>` reads as its fallback when
/// the key is absent or holds a value of the wrong shape.
///
/// Keys are compared by name only at runtime. Nothing stops two keys with
/// the same name but different types from coexisting; reading through the
/// "wrong" one degrades to absence or the fallback rather than failing.
pub struct Key<T> {
    name: &'static str,
    default: Option<fn() -> T>,
}

impl<T> Key<T> {
    /// Create a key whose fallback is `T::default()`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    /// Create a key whose fallback is produced by `default`.
    pub const fn with_default(name: &'static str, default: fn() -> T) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }

    /// The storage name of this key.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this key declares its own fallback.
    pub const fn has_declared_default(&self) -> bool {
        self.default.is_some()
    }
}

impl<T: Storable> Key<T> {
    /// The value read when nothing usable is stored.
    pub fn fallback(&self) -> T {
        match self.default {
            Some(default) => default(),
            None => T::default(),
        }
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// Anything that names a stored key: plain strings or typed keys.
pub trait KeyName {
    fn key_name(&self) -> &str;
}

impl KeyName for str {
    fn key_name(&self) -> &str {
        self
    }
}

impl KeyName for String {
    fn key_name(&self) -> &str {
        self
    }
}

impl<T> KeyName for Key<T> {
    fn key_name(&self) -> &str {
        self.name
    }
}

impl<K: KeyName + ?Sized> KeyName for &K {
    fn key_name(&self) -> &str {
        (**self).key_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    register_key!(const STRINGS: Vec<String> = "strings");
    register_key!(const OPT_STRINGS: Option<Vec<String>> = "strings");
    fn three() -> i64 {
        3
    }

    register_key!(
        /// Doc comments pass through.
        const RETRIES: i64 = "retries",
        default = three
    );

    #[test]
    fn name_and_fallback() {
        assert_eq!(STRINGS.name(), "strings");
        assert!(STRINGS.fallback().is_empty());
        assert_eq!(OPT_STRINGS.fallback(), None);
        assert_eq!(RETRIES.fallback(), 3);
        assert!(RETRIES.has_declared_default());
        assert!(!STRINGS.has_declared_default());
    }

    #[test]
    fn keys_sharing_a_name() {
        assert_eq!(STRINGS.key_name(), OPT_STRINGS.key_name());
    }

    #[test]
    fn key_name_for_strings() {
        assert_eq!("plain".key_name(), "plain");
        assert_eq!(String::from("owned").key_name(), "owned");
        assert_eq!((&STRINGS).key_name(), "strings");
    }

    #[test]
    fn keys_are_copy() {
        let a = RETRIES;
        let b = a;
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn debug_names_type() {
        let debug = format!("{:?}", RETRIES);
        assert!(debug.contains("retries"));
        assert!(debug.contains("i64"));
    }
}

//! Application namespace policy.
//!
//! Host preference stores usually mix application keys with keys owned by
//! the system. A [`Namespace`] names the reserved part by prefix so that
//! [`Store::remove_all`](crate::Store::remove_all) can leave it alone.

use serde::{Deserialize, Serialize};

/// Set of key prefixes reserved for the host system.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace {
    reserved_prefixes: Vec<String>,
}

impl Namespace {
    /// A namespace that owns every key.
    pub fn new() -> Self {
        Self::default()
    }

    /// A namespace that reserves keys starting with any of `prefixes`.
    pub fn with_reserved<I, P>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            reserved_prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// Returns `true` if `key` belongs to the system rather than the application.
    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved_prefixes
            .iter()
            .any(|prefix| key.starts_with(prefix.as_str()))
    }

    /// Returns `true` if `key` belongs to the application.
    pub fn owns(&self, key: &str) -> bool {
        !self.is_reserved(key)
    }

    pub fn reserved_prefixes(&self) -> &[String] {
        &self.reserved_prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_owns_everything() {
        let ns = Namespace::new();
        assert!(ns.owns("anything"));
        assert!(ns.owns(""));
    }

    #[test]
    fn reserved_prefixes_match() {
        let ns = Namespace::with_reserved(["NS", "Apple"]);
        assert!(ns.is_reserved("NSLanguages"));
        assert!(ns.is_reserved("AppleLocale"));
        assert!(ns.owns("theme"));
        assert!(ns.owns("ns_lowercase"));
    }

    #[test]
    fn empty_prefix_is_ignored() {
        let ns = Namespace::with_reserved([""]);
        assert!(ns.reserved_prefixes().is_empty());
        assert!(ns.owns("key"));
    }
}

//! URLs stored as plain strings.
//!
//! A [`Url`] is written as its serialized string. Reading accepts any
//! absolute URL, and also a filesystem path, which becomes a `file://` URL.
//! A leading `~` expands to the current user's home directory, so a stored
//! `"~/Desktop"` reads as `file:///home/<user>/Desktop`. Relative paths
//! resolve against the current directory.
//!
//! `Url` has no zero value, so URL keys are declared as `Key<Option<Url>>`.

use std::path::{Path, PathBuf};

use prefs_types::RawValue;
use tracing::debug;
use url::Url;

use crate::error::KeyResult;
use crate::value::PrefValue;

impl PrefValue for Url {
    fn to_raw(&self) -> KeyResult<RawValue> {
        Ok(RawValue::String(self.as_str().to_string()))
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_str().and_then(parse_location)
    }
}

/// Read a stored string as a URL or a filesystem path.
pub fn parse_location(text: &str) -> Option<Url> {
    if text.is_empty() {
        return None;
    }
    if text.starts_with('~') {
        return file_url(&expand_tilde(text));
    }
    match Url::parse(text) {
        Ok(url) => Some(url),
        Err(_) => file_url(Path::new(text)),
    }
}

/// Replace a leading `~` or `~/` with the home directory.
///
/// Other strings, including `~user` forms, are returned unchanged.
pub fn expand_tilde(text: &str) -> PathBuf {
    let rest = match text.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return PathBuf::from(text),
    };
    match home::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest.trim_start_matches('/')),
        None => {
            debug!(path = text, "no home directory; leaving tilde unexpanded");
            PathBuf::from(text)
        }
    }
}

fn file_url(path: &Path) -> Option<Url> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };
    Url::from_file_path(&absolute).ok()
}

use crate::compat::{Vec, format};
use crate::error::{Error, Result};

/// Read-only, string keyed mapping view.
///
/// Lookups follow first-occurrence-wins: a key that holds several values
/// answers with the first one. Iteration yields each key once.
pub trait ReadMapping {
    /// First value stored under `key`
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Every value stored under `key`, in insertion order
    fn lookup_all(&self, key: &str) -> Vec<&str>;

    /// Unique keys in first-occurrence order
    fn iter_keys(&self) -> impl Iterator<Item = &str>;

    /// Number of unique keys
    fn len(&self) -> usize;

    fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Single value stored under `key`.
    ///
    /// Fails with [`Error::CookieConflict`] when the key holds more than one
    /// value, so callers that need exactly one (cookie jars) can tell an
    /// ambiguous name from a missing one.
    fn lookup_unique(&self, key: &str) -> Result<Option<&str>> {
        match self.lookup_all(key).as_slice() {
            [] => Ok(None),
            [value] => Ok(Some(*value)),
            _ => {
                tracing::debug!(key, "ambiguous single-value lookup");
                Err(Error::cookie_conflict(format!(
                    "Multiple values exist with name={key}"
                )))
            }
        }
    }
}

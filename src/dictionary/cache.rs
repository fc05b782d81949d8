// Dictionary cache - in-process mirror of the store, consulted on every
// keystroke.
//
// Lookups never touch the database. The content is replaced wholesale by
// `refresh`: the new map is loaded first and only swapped in on success, so a
// failed refresh leaves the last-known-good entries in place and expansion
// keeps working in a possibly-stale mode.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::dictionary::entry::DictionaryError;
use crate::dictionary::store::DictionaryStore;

/// Low-latency in-memory mapping of canonical keys to expansions
#[derive(Debug, Default)]
pub struct DictionaryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl DictionaryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an expansion by canonical key.
    ///
    /// A miss means "not currently cached" - expected right after an external
    /// store mutation, until the next refresh.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Replace the entire cache content from the store.
    ///
    /// Atomic from the caller's perspective: either the cache reflects the
    /// store afterwards, or the load failed and the prior content is kept.
    pub fn refresh(&self, store: &DictionaryStore) -> Result<(), DictionaryError> {
        let loaded = store.load_all()?;
        let count = loaded.len();
        *self.entries.write() = loaded;
        crate::debug!("Dictionary cache refreshed with {} entries", count);
        Ok(())
    }

    /// Read-only copy of the cache content, for diagnostics and UI listings.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.read().clone()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when no entries are cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Replace the cache content directly, bypassing the store.
    #[cfg(test)]
    pub(crate) fn replace_for_tests(&self, entries: HashMap<String, String>) {
        *self.entries.write() = entries;
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;

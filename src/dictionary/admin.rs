// Dictionary admin - mutations from the management dialog.
//
// Writes go to the store, then the shared cache is refreshed so in-flight
// expansion sees the change. Actions are a closed enum handled exhaustively;
// there is no string-labeled dispatch.

use std::sync::Arc;

use serde::Serialize;

use crate::dictionary::cache::DictionaryCache;
use crate::dictionary::entry::{canonical_key, AbbreviationEntry, DictionaryError};
use crate::dictionary::store::DictionaryStore;

/// An administrative mutation of the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    /// Insert a new entry or overwrite the expansion of an existing key
    Upsert { key: String, expansion: String },
    /// Remove an entry by key
    Delete { key: String },
}

/// Kind of change that was applied, for UI notification payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeKind {
    Upserted,
    Deleted,
}

/// Result of a successful admin mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryChange {
    pub kind: ChangeKind,
    /// Canonical key the change applied to
    pub key: String,
}

/// Administrative interface over the store and the shared cache
pub struct DictionaryAdmin {
    store: Arc<DictionaryStore>,
    cache: Arc<DictionaryCache>,
}

impl DictionaryAdmin {
    pub fn new(store: Arc<DictionaryStore>, cache: Arc<DictionaryCache>) -> Self {
        Self { store, cache }
    }

    /// Apply a mutation to the store, then refresh the cache.
    ///
    /// Store failures are returned to the caller (the management UI informs
    /// the user); the cache keeps its last-known-good content, so live
    /// expansion degrades to stale rather than stopping.
    pub fn apply(&self, action: AdminAction) -> Result<DictionaryChange, DictionaryError> {
        let change = match action {
            AdminAction::Upsert { key, expansion } => {
                let canonical = self.store.upsert(&key, &expansion)?;
                DictionaryChange {
                    kind: ChangeKind::Upserted,
                    key: canonical,
                }
            }
            AdminAction::Delete { key } => {
                let canonical = canonical_key(&key);
                self.store.delete(&canonical)?;
                DictionaryChange {
                    kind: ChangeKind::Deleted,
                    key: canonical,
                }
            }
        };

        if let Err(e) = self.cache.refresh(&self.store) {
            crate::warn!("Cache refresh after {:?} on {:?} failed: {}", change.kind, change.key, e);
            return Err(e);
        }

        Ok(change)
    }

    /// All entries from the store, sorted by key, for the management dialog.
    pub fn entries(&self) -> Result<Vec<AbbreviationEntry>, DictionaryError> {
        let mut entries: Vec<AbbreviationEntry> = self
            .store
            .load_all()?
            .into_iter()
            .map(|(key, expansion)| AbbreviationEntry { key, expansion })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }

    /// Normalized lookup against the cache (the dialog's Find button).
    pub fn find(&self, key: &str) -> Option<String> {
        self.cache.lookup(&canonical_key(key))
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;

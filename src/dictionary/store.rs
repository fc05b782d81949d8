// Dictionary store - durable trigger/expansion persistence over Turso/libsql.
//
// Synchronous facade: the editor's event loop is single-threaded, so every
// operation bridges into the async libsql client with util::run_async and
// blocks for its duration. Keys are validated and normalized here, before
// anything touches storage.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::dictionary::entry::{canonical_key, validate_entry, DictionaryError};
use crate::dictionary::seed::DEFAULT_ENTRIES;
use crate::turso::{initialize_schema, TursoClient};
use crate::util::run_async;

/// Durable store for abbreviation entries, source of truth across restarts
#[derive(Debug)]
pub struct DictionaryStore {
    client: TursoClient,
}

impl DictionaryStore {
    /// Open the store under `db_dir`, creating the database and schema if
    /// they do not exist yet.
    pub fn open(db_dir: PathBuf) -> Result<Self, DictionaryError> {
        let client = run_async(async {
            let client = TursoClient::new(db_dir)
                .await
                .map_err(|e| DictionaryError::Load(e.to_string()))?;
            initialize_schema(&client)
                .await
                .map_err(|e| DictionaryError::Load(e.to_string()))?;
            Ok::<_, DictionaryError>(client)
        })?;

        Ok(Self { client })
    }

    /// Insert or overwrite an entry, returning the canonical key written.
    ///
    /// The key is normalized first; an empty key or empty expansion is
    /// rejected with a validation error and nothing is persisted.
    pub fn upsert(&self, key: &str, expansion: &str) -> Result<String, DictionaryError> {
        let canonical = validate_entry(key, expansion)?;

        run_async(self.client.upsert_abbreviation(&canonical, expansion))
            .map_err(|e| DictionaryError::Persistence(e.to_string()))?;

        crate::debug!("Upserted abbreviation {:?}", canonical);
        Ok(canonical)
    }

    /// Delete an entry by key (normalized first). Deleting an absent key
    /// leaves the store unchanged and succeeds.
    pub fn delete(&self, key: &str) -> Result<(), DictionaryError> {
        let canonical = canonical_key(key);

        run_async(self.client.delete_abbreviation(&canonical))
            .map_err(|e| DictionaryError::Persistence(e.to_string()))?;

        crate::debug!("Deleted abbreviation {:?}", canonical);
        Ok(())
    }

    /// Load every persisted entry.
    ///
    /// On I/O failure this returns an error rather than a partial or empty
    /// map; callers must not treat a failed load as an empty dictionary.
    pub fn load_all(&self) -> Result<HashMap<String, String>, DictionaryError> {
        run_async(self.client.load_abbreviations())
            .map_err(|e| DictionaryError::Load(e.to_string()))
    }

    /// Seed the built-in default entries if the store is empty.
    ///
    /// Returns the number of entries written: the full default set on first
    /// run, 0 when the store already has content (re-running is a no-op).
    pub fn ensure_seeded(&self) -> Result<usize, DictionaryError> {
        let existing = self.load_all()?;
        if !existing.is_empty() {
            crate::debug!(
                "Store already has {} entries, skipping seed",
                existing.len()
            );
            return Ok(0);
        }

        for (key, expansion) in DEFAULT_ENTRIES {
            self.upsert(key, expansion)?;
        }

        crate::info!("Seeded {} default abbreviations", DEFAULT_ENTRIES.len());
        Ok(DEFAULT_ENTRIES.len())
    }

    /// Drop the backing table so subsequent reads and writes fail.
    #[cfg(test)]
    pub(crate) fn break_backing_table(&self) {
        run_async(self.client.execute("DROP TABLE abbreviation", ()))
            .expect("dropping the abbreviation table should succeed");
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

// Abbreviation CRUD operations using Turso/libsql
//
// Keys arriving here are already in canonical form; normalization and
// validation happen in the dictionary store facade.

use std::collections::HashMap;

use libsql::params;

use super::client::{TursoClient, TursoError};

impl TursoClient {
    /// Insert or overwrite an abbreviation entry.
    ///
    /// The key is the entry's identity, so an existing key has its expansion
    /// replaced rather than producing a duplicate row.
    pub async fn upsert_abbreviation(
        &self,
        key: &str,
        expansion: &str,
    ) -> Result<(), TursoError> {
        self.execute(
            "INSERT OR REPLACE INTO abbreviation (key, value) VALUES (?1, ?2)",
            params![key.to_string(), expansion.to_string()],
        )
        .await?;
        Ok(())
    }

    /// Delete an abbreviation entry by key.
    ///
    /// Deleting a key that is not present is a no-op.
    pub async fn delete_abbreviation(&self, key: &str) -> Result<(), TursoError> {
        self.execute(
            "DELETE FROM abbreviation WHERE key = ?1",
            params![key.to_string()],
        )
        .await?;
        Ok(())
    }

    /// Load every abbreviation entry.
    ///
    /// Returns the full key -> expansion map, or an error if the read fails.
    /// A failed load is never reported as an empty dictionary.
    pub async fn load_abbreviations(&self) -> Result<HashMap<String, String>, TursoError> {
        let mut rows = self.query("SELECT key, value FROM abbreviation", ()).await?;

        let mut entries = HashMap::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| TursoError::Query(e.to_string()))?
        {
            let key: String = row.get(0).map_err(|e| TursoError::Query(e.to_string()))?;
            let value: String = row.get(1).map_err(|e| TursoError::Query(e.to_string()))?;
            entries.insert(key, value);
        }

        Ok(entries)
    }
}

#[cfg(test)]
#[path = "abbreviations_test.rs"]
mod tests;

// Abbreviation entry type, key normalization, and write validation.
//
// The canonical key form is ":" + lowercase word + one trailing space, e.g.
// ":htn ". Every key is normalized into this form before it reaches storage
// or a cache lookup, so the same trigger always maps to the same row.

use serde::{Deserialize, Serialize};

/// A single trigger -> expansion pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AbbreviationEntry {
    /// Canonical trigger key (e.g. ":htn ")
    pub key: String,
    /// Expansion text (e.g. "Hypertension")
    pub expansion: String,
}

/// Error types for dictionary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// Rejected before reaching the store; nothing was written
    #[error("Invalid entry: {0}")]
    Validation(String),
    /// Failed to persist entries
    #[error("Failed to persist entries: {0}")]
    Persistence(String),
    /// Failed to load entries
    #[error("Failed to load entries: {0}")]
    Load(String),
}

/// Normalize a raw key into canonical form.
///
/// Leading/trailing whitespace and any leading sentinel characters are
/// stripped, the remainder is lowercased, and the sentinel plus a single
/// trailing space are re-applied. Normalizing an already-canonical key yields
/// the same key.
pub fn canonical_key(raw: &str) -> String {
    let word = raw.trim().trim_start_matches(':').trim();
    format!(":{} ", word.to_lowercase())
}

/// Validate a key/expansion pair for writing, returning the canonical key.
pub(crate) fn validate_entry(key: &str, expansion: &str) -> Result<String, DictionaryError> {
    let canonical = canonical_key(key);
    let word = &canonical[1..canonical.len() - 1];

    if word.is_empty() {
        return Err(DictionaryError::Validation("key must not be empty".to_string()));
    }
    if !word.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(DictionaryError::Validation(format!(
            "key '{}' must contain only word characters",
            word
        )));
    }
    if expansion.trim().is_empty() {
        return Err(DictionaryError::Validation(
            "expansion must not be empty".to_string(),
        ));
    }

    Ok(canonical)
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;

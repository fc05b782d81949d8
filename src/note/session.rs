// Note session - the session-scoped context owning the fields, the shared
// dictionary cache, the expansion engine, and the derived preview.
//
// Edit flow: the UI applies a field's new content through `apply_edit`. User
// edits are run through the expansion engine; a rewrite the engine produces
// is applied as an engine rewrite, which is never re-scanned for triggers, so
// an expansion cannot cascade into another within the same event. The preview
// is recomputed for every edit, expansion or not, so it always reflects the
// post-expansion text.

use std::sync::Arc;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::dictionary::{DictionaryAdmin, DictionaryCache, DictionaryError, DictionaryStore, ExpansionEngine};
use crate::note::aggregator;
use crate::note::field::Field;

/// Origin of a field edit.
///
/// The expansion engine only reacts to `User` edits; its own rewrites are
/// applied as `EngineRewrite` and skip re-detection. The aggregator reacts to
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSource {
    User,
    EngineRewrite,
}

/// What happened to an edit after it was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOutcome {
    /// True when a trigger was expanded and the field content rewritten
    pub expanded: bool,
    /// Caret position to restore after a rewrite; `None` when no rewrite
    pub caret: Option<usize>,
}

/// Error types for note session operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoteError {
    /// Edit addressed to a field index that does not exist
    #[error("Unknown field index {0}")]
    UnknownField(usize),
    /// Session bootstrap could not prepare the dictionary
    #[error("Failed to initialize dictionary: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// One editing session: fields, shared cache, engine, and preview
pub struct NoteSession {
    fields: Vec<Field>,
    cache: Arc<DictionaryCache>,
    engine: ExpansionEngine,
    preview: String,
}

impl NoteSession {
    /// Create a session with fields built from `titles`, in declaration
    /// order, sharing `cache` with whoever refreshes it.
    pub fn new(titles: &[String], cache: Arc<DictionaryCache>) -> Self {
        let fields = titles
            .iter()
            .enumerate()
            .map(|(index, title)| Field::new(title.clone(), index))
            .collect();

        Self {
            fields,
            cache,
            engine: ExpansionEngine::new(),
            preview: String::new(),
        }
    }

    /// Open the store, seed defaults, fill the cache, and build a session
    /// plus the admin handle that manages the same dictionary.
    pub fn bootstrap(config: &EditorConfig) -> Result<(Self, DictionaryAdmin), NoteError> {
        let store = Arc::new(DictionaryStore::open(config.resolve_data_dir())?);
        let seeded = store.ensure_seeded()?;
        if seeded > 0 {
            crate::info!("First run: seeded {} default abbreviations", seeded);
        }

        let cache = Arc::new(DictionaryCache::new());
        cache.refresh(&store)?;

        let session = Self::new(&config.sections, cache.clone());
        let admin = DictionaryAdmin::new(store, cache);
        Ok((session, admin))
    }

    /// Apply new content for a field and recompute the preview.
    ///
    /// For a user edit, the expansion engine may rewrite the content once;
    /// the rewrite is applied immediately under `EngineRewrite` and is not
    /// scanned again. This path performs no store I/O and never blocks
    /// typing.
    pub fn apply_edit(
        &mut self,
        field_index: usize,
        content: String,
        source: EditSource,
    ) -> Result<EditOutcome, NoteError> {
        let field = self
            .fields
            .get_mut(field_index)
            .ok_or(NoteError::UnknownField(field_index))?;
        field.content = content;

        let outcome = match source {
            EditSource::User => match self.engine.on_change(&field.content, &self.cache) {
                Some(rewrite) => {
                    field.content = rewrite.content;
                    EditOutcome {
                        expanded: true,
                        caret: Some(rewrite.caret),
                    }
                }
                None => EditOutcome {
                    expanded: false,
                    caret: None,
                },
            },
            EditSource::EngineRewrite => EditOutcome {
                expanded: false,
                caret: None,
            },
        };

        self.preview = aggregator::recompute(&self.fields);
        Ok(outcome)
    }

    /// The last computed preview.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Current fields, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Content of one field.
    pub fn field_content(&self, field_index: usize) -> Result<&str, NoteError> {
        self.fields
            .get(field_index)
            .map(|f| f.content.as_str())
            .ok_or(NoteError::UnknownField(field_index))
    }

    /// The dictionary cache this session reads from.
    pub fn cache(&self) -> &Arc<DictionaryCache> {
        &self.cache
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

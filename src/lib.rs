// chartnote - live abbreviation expansion and note aggregation engine.
//
// Backend of a clinical note editor: per-section text fields are edited by a
// UI layer, completed trigger tokens (":htn ") are rewritten into their
// clinical expansion ("Hypertension"), and a combined read-only preview of all
// non-empty fields is recomputed on every change.

pub mod config;
pub mod dictionary;
pub mod note;
pub mod paths;
pub mod turso;
pub mod util;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use config::EditorConfig;
pub use dictionary::{
    AbbreviationEntry, AdminAction, ChangeKind, DictionaryAdmin, DictionaryCache,
    DictionaryChange, DictionaryError, DictionaryStore, ExpansionEngine, TriggerDetector,
};
pub use note::{EditOutcome, EditSource, Field, NoteError, NoteSession};

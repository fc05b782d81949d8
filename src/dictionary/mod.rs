// Dictionary module - durable trigger/expansion storage plus the live
// expansion machinery consulted on every keystroke.

mod admin;
mod cache;
mod detector;
mod engine;
mod entry;
mod seed;
mod store;

pub use admin::{AdminAction, ChangeKind, DictionaryAdmin, DictionaryChange};
pub use cache::DictionaryCache;
pub use detector::{TriggerDetector, TriggerMatch};
pub use engine::{ExpansionEngine, Rewrite};
pub use entry::{canonical_key, AbbreviationEntry, DictionaryError};
pub use seed::DEFAULT_ENTRIES;
pub use store::DictionaryStore;

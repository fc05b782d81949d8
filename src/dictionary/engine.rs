// Expansion engine - performs the single, non-recursive rewrite of a field.
//
// The engine never mutates anything itself: it returns the rewritten content
// (and the caret position for it) and the caller decides how to apply it. The
// session applies the result as an engine rewrite, which is exempt from
// re-detection, so an expansion can never trigger itself.

use crate::dictionary::cache::DictionaryCache;
use crate::dictionary::detector::TriggerDetector;
use crate::dictionary::entry::canonical_key;

/// A rewrite produced by the engine for a single edit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The full replacement content for the field
    pub content: String,
    /// Caret position: end of the newly inserted expansion
    pub caret: usize,
}

/// Orchestrates trigger detection and cache lookup for one edit event
#[derive(Debug, Default)]
pub struct ExpansionEngine {
    detector: TriggerDetector,
}

impl ExpansionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a user edit of a field.
    ///
    /// Returns `Some(rewrite)` when a completed trigger with a known key is
    /// present, `None` otherwise. An unrecognized trigger is not an error;
    /// the literal typed text stays untouched.
    pub fn on_change(&self, text: &str, cache: &DictionaryCache) -> Option<Rewrite> {
        let m = self.detector.detect(text, None)?;
        let key = canonical_key(&m.raw_key);

        let expansion = cache.lookup(&key)?;

        // Everything from the trigger onward is replaced by the expansion
        // plus one trailing space for continued typing.
        let mut content = String::with_capacity(m.start + expansion.len() + 1);
        content.push_str(&text[..m.start]);
        content.push_str(&expansion);
        content.push(' ');

        crate::debug!("Expanded {:?} at offset {}", key, m.start);

        let caret = content.len();
        Some(Rewrite { content, caret })
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;

// Trigger detector - finds a completed trigger token inside a buffer.
//
// A trigger is the sentinel ':' followed by optional whitespace and one or
// more word characters, and it is only *completed* once trailing whitespace
// is typed after it. An unterminated ":ht" is work in progress and never
// matches. When several triggers are present the first occurrence from the
// start of the text wins; the policy is independent of where the edit
// happened, so a cursor hint does not change the result.

use regex::Regex;

/// A completed trigger found in a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
    /// Byte offset of the sentinel character
    pub start: usize,
    /// Byte offset one past the terminating whitespace
    pub end: usize,
    /// The word between the sentinel and the terminator, as typed
    pub raw_key: String,
}

/// Detects completed trigger sequences in field text
#[derive(Debug)]
pub struct TriggerDetector {
    pattern: Regex,
}

impl Default for TriggerDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerDetector {
    pub fn new() -> Self {
        // Sentinel, optional intervening whitespace, word, terminating whitespace
        let pattern = Regex::new(r":\s*(\w+)\s").expect("trigger pattern must compile");
        Self { pattern }
    }

    /// Scan `text` for the first completed trigger.
    ///
    /// `cursor_hint` is accepted from edit events for interface parity but
    /// does not affect the first-occurrence policy.
    pub fn detect(&self, text: &str, _cursor_hint: Option<usize>) -> Option<TriggerMatch> {
        let captures = self.pattern.captures(text)?;
        let whole = captures.get(0)?;
        let key = captures.get(1)?;

        Some(TriggerMatch {
            start: whole.start(),
            end: whole.end(),
            raw_key: key.as_str().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "detector_test.rs"]
mod tests;

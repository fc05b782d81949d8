// A note section field: an ordered, titled, mutable text buffer.

use serde::Serialize;

/// One independently-edited note section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Section title shown by the UI and prefixed in the preview (e.g. "CC>")
    pub title: String,
    /// Current buffer content
    pub content: String,
    /// Position in the preview; fixed at creation
    pub index: usize,
}

impl Field {
    pub fn new(title: impl Into<String>, index: usize) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            index,
        }
    }

    /// True when the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

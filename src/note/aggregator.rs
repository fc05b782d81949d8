// Aggregator - recomputes the read-only preview from all fields.
//
// Pure function of the current field states: the preview is rebuilt from
// scratch on every call, never patched incrementally, so calling it twice
// without intervening edits yields identical output.

use crate::note::field::Field;

/// Concatenate all non-blank fields, in ascending `index` order.
///
/// Each contributing field appears as "{title} {content}\n\n" with its
/// content trimmed; blank fields contribute nothing, not even their title.
/// The final result is trimmed of trailing whitespace.
pub fn recompute(fields: &[Field]) -> String {
    let mut ordered: Vec<&Field> = fields.iter().collect();
    ordered.sort_by_key(|f| f.index);

    let mut preview = String::new();
    for field in ordered {
        if field.is_blank() {
            continue;
        }
        preview.push_str(&field.title);
        preview.push(' ');
        preview.push_str(field.content.trim());
        preview.push_str("\n\n");
    }

    preview.trim_end().to_string()
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;

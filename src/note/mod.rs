// Note module - the per-section fields, the derived preview, and the session
// that wires field edits through expansion and aggregation.

mod aggregator;
mod field;
mod session;

pub use aggregator::recompute;
pub use field::Field;
pub use session::{EditOutcome, EditSource, NoteError, NoteSession};

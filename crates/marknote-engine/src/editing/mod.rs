/*!
 * # Editing
 *
 * Edits to note text are commands compiled to a single replacement and
 * applied to an `xi_rope::Rope`. The rope bytes are the note: nothing is
 * regenerated from rendered nodes, so an edit touches exactly the bytes it
 * names and the rest of the note round-trips unchanged.
 *
 * ## Module Structure
 *
 * - **`document`**: `Document`, the rope buffer with selection and version
 * - **`commands`**: `Cmd` and `Markup`, compiled against the current text
 * - **`checkbox`**: `toggle_checkbox`, the one-shot form of `Cmd::ToggleCheckbox`
 * - **`patch`**: what an applied command changed
 *
 * ## Concurrency
 *
 * Everything here is synchronous and owns its text. A caller that toggles
 * two lines must apply the second toggle to the output of the first; two
 * toggles computed from the same stale text race at whole-note granularity.
 */

pub mod checkbox;
pub mod commands;
pub mod document;
pub mod patch;

pub use checkbox::toggle_checkbox;
pub use commands::{Cmd, Markup};
pub use document::Document;
pub use patch::Patch;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("line index {index} is out of range (note has {line_count} lines)")]
    InvalidIndex { index: usize, line_count: usize },
    #[error("byte range {start}..{end} is invalid for a note of {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },
    #[error("note is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

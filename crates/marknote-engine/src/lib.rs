pub mod editing;
pub mod export;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Cmd, Document, EditError, Markup, Patch, toggle_checkbox};
pub use export::to_html;
pub use io::*;
pub use models::{Note, NoteError};
pub use parsing::{BlockNode, InlineSpan, checklist_lines, format, render, render_line};

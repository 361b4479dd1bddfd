//! # Inline Formatting
//!
//! Cursor-based, single-pass scanning of a text segment into typed spans.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Underline, Strike, Code, Link)
//! - **`kinds`**: Inline constructs with owned delimiters (Emphasis, CodeSpan, Link, Image)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `format()` and the code-run splitter
//!
//! ## Raw Zone Precedence
//!
//! Code spans are split out before any other formatting: `` `**x**` `` is a
//! single Code span, not bold text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{CodeRun, format, format_with_code, has_code_span, split_code_runs};
pub use types::{InlineSpan, plain_text};

//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters.
//!
//! - **`Emphasis`**: `**bold**`, `*italic*`, `__underline__`, `~~strike~~`
//! - **`CodeSpan`**: `` ` `` raw zone that suppresses other formatting
//! - **`Link`** / **`Image`**: `[text](url)` and `![alt](src)`
//!
//! The scanner calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, ImageMatch, Link, LinkMatch};

//! # Block Rendering
//!
//! Two-phase, strictly per-line rendering.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    by the first matching rule, in this order: heading, checklist,
//!    links present, image present, whole-line code fence, inline code
//!    present, bullet, quote, rule, non-blank paragraph, blank.
//!
//! 2. **Block Construction** (`build`): a `LineClass` becomes a `BlockNode`,
//!    with its text run through the inline formatter.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`
//! - **`kinds`**: Block kinds with owned delimiters (Heading, Checklist, CodeFence, ...)
//! - **`classify`**: `NoteLineClassifier` produces a `LineClass` per line
//! - **`build`**: `build_block` turns a `LineClass` into a `BlockNode`
//!
//! ## Key Invariants
//!
//! - One node per line, no state carried between lines
//! - Fenced code lines are raw zones: no inline formatting inside

pub mod build;
pub mod classify;
pub mod kinds;
pub mod types;

pub use build::build_block;
pub use classify::{LineClass, NoteLineClassifier};
pub use types::BlockNode;

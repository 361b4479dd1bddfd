//! UniFFI bindings for marknote mobile apps
//!
//! Exposes rendering and the checkbox mutator so the Kotlin and Swift apps
//! draw notes from the same line model as the terminal viewer. Rendered
//! nodes cross the boundary as flat records tagged with a `kind` string.

use marknote_engine::{BlockNode, Cmd, Document, EditError, InlineSpan, render, to_html};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid line: {reason}")]
    InvalidIndex { reason: String },
    #[error("Edit failed: {reason}")]
    EditFailed { reason: String },
}

impl From<EditError> for FfiError {
    fn from(err: EditError) -> Self {
        match err {
            EditError::InvalidIndex { .. } => FfiError::InvalidIndex {
                reason: err.to_string(),
            },
            other => FfiError::EditFailed {
                reason: other.to_string(),
            },
        }
    }
}

// ============ Note Handle ============

/// A note held in memory across several edits.
///
/// Toggles apply to the handle's current text, so a UI tapping two boxes in
/// quick succession never computes the second toggle from stale content.
#[derive(uniffi::Object)]
pub struct NoteHandle {
    inner: Mutex<Document>,
}

#[uniffi::export]
impl NoteHandle {
    #[uniffi::constructor]
    pub fn from_string(content: String) -> Self {
        Self {
            inner: Mutex::new(Document::from_text(&content)),
        }
    }

    pub fn get_text(&self) -> String {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        let doc = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        doc.text()
    }

    /// Bumped on every applied edit; unchanged by no-op toggles
    pub fn version(&self) -> u64 {
        let doc = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        doc.version()
    }

    pub fn render(&self) -> Result<Vec<BlockDto>, FfiError> {
        let doc = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        blocks_to_dto(doc.render())
    }

    /// Flip the checkbox on `line` and return the new text
    pub fn toggle_checkbox(&self, line: u32) -> Result<String, FfiError> {
        let mut doc = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        doc.apply(Cmd::ToggleCheckbox {
            line: line as usize,
        })?;
        Ok(doc.text())
    }
}

// ============ DTOs ============

/// One rendered line of a note.
#[derive(Debug, uniffi::Record)]
pub struct BlockDto {
    /// Line index in the note, for routing taps back to `toggle_checkbox`
    pub line: u32,
    /// Node kind, e.g. "heading", "checklist_item", "code_block"
    pub kind: String,
    /// 1-3 for headings, 0 otherwise
    pub heading_level: u8,
    /// Checkbox state for checklist items
    pub checked: Option<bool>,
    /// Verbatim code for code blocks
    pub code: Option<String>,
    pub image_src: Option<String>,
    pub image_alt: Option<String>,
    pub spans: Vec<SpanDto>,
}

impl BlockDto {
    fn from_engine(line: u32, block: BlockNode) -> Self {
        let mut dto = Self {
            line,
            kind: block.kind_name().to_string(),
            heading_level: 0,
            checked: None,
            code: None,
            image_src: None,
            image_alt: None,
            spans: block.spans().iter().map(SpanDto::from_engine).collect(),
        };

        match block {
            BlockNode::Heading { level, .. } => dto.heading_level = level,
            BlockNode::ChecklistItem { checked, .. } => dto.checked = Some(checked),
            BlockNode::CodeBlock { code } => dto.code = Some(code),
            BlockNode::ImageLine { alt, src } => {
                dto.image_alt = Some(alt);
                dto.image_src = Some(src);
            }
            _ => {}
        }
        dto
    }
}

/// A styled fragment of a line.
#[derive(Debug, uniffi::Record)]
pub struct SpanDto {
    /// "text", "bold", "italic", "underline", "strike", "code" or "link"
    pub kind: String,
    pub text: String,
    pub url: Option<String>,
}

impl SpanDto {
    fn from_engine(span: &InlineSpan) -> Self {
        let kind = match span {
            InlineSpan::Text(_) => "text",
            InlineSpan::Bold(_) => "bold",
            InlineSpan::Italic(_) => "italic",
            InlineSpan::Underline(_) => "underline",
            InlineSpan::Strike(_) => "strike",
            InlineSpan::Code(_) => "code",
            InlineSpan::Link { .. } => "link",
        };
        let url = match span {
            InlineSpan::Link { url, .. } => Some(url.clone()),
            _ => None,
        };
        Self {
            kind: kind.to_string(),
            text: span.visible_text().to_string(),
            url,
        }
    }
}

/// Line indices cross the boundary as `u32`; a note with more lines than
/// that cannot be addressed from the apps.
fn line_index(line: usize) -> Result<u32, FfiError> {
    u32::try_from(line).map_err(|_| FfiError::InvalidIndex {
        reason: format!("line {line} does not fit in a u32 index"),
    })
}

fn blocks_to_dto(blocks: Vec<BlockNode>) -> Result<Vec<BlockDto>, FfiError> {
    blocks
        .into_iter()
        .enumerate()
        .map(|(line, block)| line_index(line).map(|line| BlockDto::from_engine(line, block)))
        .collect()
}

// ============ Standalone Functions ============

#[uniffi::export]
pub fn render_note(content: String) -> Result<Vec<BlockDto>, FfiError> {
    blocks_to_dto(render(&content))
}

#[uniffi::export]
pub fn render_note_html(content: String) -> String {
    to_html(&render(&content))
}

/// Flip the checkbox on one line of `content`.
///
/// Lines without a checklist marker come back unchanged. An index at or past
/// the line count is an error.
#[uniffi::export]
pub fn toggle_checkbox(content: String, line: u32) -> Result<String, FfiError> {
    Ok(marknote_engine::toggle_checkbox(&content, line as usize)?)
}

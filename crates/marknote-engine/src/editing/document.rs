use std::ops::Range;

use xi_rope::{Delta, Rope, RopeInfo};

use crate::editing::{Cmd, EditError, Patch, commands::compile_command};
use crate::parsing::{BlockNode, lines, render};

/// An open note being edited.
///
/// The note text lives in a single `xi_rope::Rope`, which is the only source
/// of truth: every change is a command compiled to a `Delta` and applied to
/// the rope, and saving writes the rope bytes back verbatim. Rendering reads
/// a fresh copy of the text each time; nothing rendered is cached here.
///
/// ```rust
/// # use marknote_engine::editing::{Cmd, Document};
/// let mut doc = Document::from_text("- [ ] milk\n- [ ] eggs");
/// let patch = doc.apply(Cmd::ToggleCheckbox { line: 1 }).unwrap();
/// assert_eq!(doc.text(), "- [ ] milk\n- [x] eggs");
/// assert_eq!(patch.version, 1);
/// ```
#[derive(Clone)]
pub struct Document {
    /// Note text as UTF-8 (source of truth)
    pub(crate) buffer: Rope,
    /// Current selection/cursor position as byte offsets in buffer
    pub(crate) selection: Range<usize>,
    /// Incremented on every edit that changes the text
    pub(crate) version: u64,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: len..len, // Start with cursor at end
            version: 0,
        }
    }

    /// Create a new document from raw bytes, which must be UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EditError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    /// Apply a command, returning what changed.
    ///
    /// A no-op (toggling a line without a marker) leaves text, selection and
    /// version untouched and returns a patch with no changed ranges.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let text = self.text();
        let Some(edit) = compile_command(&text, &self.selection, &cmd)? else {
            return Ok(Patch {
                changed: vec![],
                new_selection: self.selection.clone(),
                version: self.version,
            });
        };

        log::trace!(
            "applying {cmd:?}: {:?} -> {:?} (v{})",
            edit.range,
            edit.insert,
            self.version
        );

        let delta: Delta<RopeInfo> = Delta::simple_edit(
            edit.range.clone(),
            Rope::from(edit.insert.as_str()),
            self.buffer.len(),
        );
        self.buffer = delta.apply(&self.buffer);

        let changed = vec![edit.range.start..edit.range.start + edit.insert.len()];
        self.selection = edit.selection;
        self.version += 1;

        Ok(Patch {
            changed,
            new_selection: self.selection.clone(),
            version: self.version,
        })
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Set the selection range. It must lie on char boundaries.
    pub fn set_selection(&mut self, selection: Range<usize>) -> Result<(), EditError> {
        let len = self.len();
        let text = self.buffer.slice_to_cow(0..len);
        if selection.start > selection.end
            || selection.end > len
            || !text.is_char_boundary(selection.start)
            || !text.is_char_boundary(selection.end)
        {
            return Err(EditError::InvalidRange {
                start: selection.start,
                end: selection.end,
                len,
            });
        }
        self.selection = selection;
        Ok(())
    }

    pub fn line_count(&self) -> usize {
        lines::line_count(&self.text())
    }

    /// Render the current text.
    pub fn render(&self) -> Vec<BlockNode> {
        render(&self.text())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.buffer.len())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .finish()
    }
}

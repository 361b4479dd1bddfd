use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

use crate::editing::{EditError, toggle_checkbox};
use crate::io::{self, IoError};
use crate::parsing::inline::plain_text;
use crate::parsing::{BlockNode, render};

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// A note on disk: where it lives under the notes directory, and its text
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    path: RelativePathBuf,
    content: String,
}

impl Note {
    pub fn new(path: RelativePathBuf, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }

    pub fn load(path: &RelativePath, notes_root: &Path) -> Result<Self, NoteError> {
        let content = io::read_note(path, notes_root)?;
        Ok(Self::new(path.to_relative_path_buf(), content))
    }

    pub fn save(&self, notes_root: &Path) -> Result<(), NoteError> {
        io::write_note(&self.path, notes_root, &self.content)?;
        Ok(())
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn render(&self) -> Vec<BlockNode> {
        render(&self.content)
    }

    /// Text of the first heading, or the file stem when there is none
    pub fn title(&self) -> String {
        self.render()
            .iter()
            .find_map(|block| match block {
                BlockNode::Heading { spans, .. } => {
                    let text = plain_text(spans);
                    (!text.trim().is_empty()).then(|| text.trim().to_string())
                }
                _ => None,
            })
            .unwrap_or_else(|| self.file_stem().to_string())
    }

    fn file_stem(&self) -> &str {
        self.path.file_stem().unwrap_or("Untitled")
    }

    /// Toggle the checklist marker on `line` in memory
    pub fn toggle_checkbox(&mut self, line: usize) -> Result<(), NoteError> {
        self.content = toggle_checkbox(&self.content, line)?;
        Ok(())
    }

    /// Toggle `line` and persist the note immediately
    pub fn toggle_and_save(&mut self, line: usize, notes_root: &Path) -> Result<(), NoteError> {
        self.toggle_checkbox(line)?;
        self.save(notes_root)
    }

    /// Counts of (checked, total) checklist items
    pub fn checklist_progress(&self) -> (usize, usize) {
        self.render()
            .iter()
            .filter_map(|block| match block {
                BlockNode::ChecklistItem { checked, .. } => Some(*checked),
                _ => None,
            })
            .fold((0, 0), |(done, total), checked| {
                (done + usize::from(checked), total + 1)
            })
    }

    /// First non-blank line's visible text, for list previews
    pub fn preview(&self) -> Option<String> {
        self.render().iter().find_map(|block| {
            let text = plain_text(block.spans());
            (!text.trim().is_empty()).then_some(text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_notes_dir};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Groceries\n- [ ] milk", "list.md", "Groceries")]
    #[case("intro\n## **Bold** title", "list.md", "Bold title")]
    #[case("- [ ] milk", "work/list.md", "list")]
    #[case("#  \nplain", "empty-heading.md", "empty-heading")]
    fn title_from_heading_or_stem(#[case] content: &str, #[case] path: &str, #[case] expected: &str) {
        let note = Note::new(RelativePathBuf::from(path), content);
        assert_eq!(note.title(), expected);
    }

    #[test]
    fn toggle_and_save_writes_through() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "todo.md", "# Todo\n- [ ] ship\n- [x] plan");

        let mut note = Note::load(RelativePath::new("todo.md"), notes_dir.path()).unwrap();
        note.toggle_and_save(1, notes_dir.path()).unwrap();

        let reloaded = Note::load(RelativePath::new("todo.md"), notes_dir.path()).unwrap();
        assert_eq!(reloaded.content(), "# Todo\n- [x] ship\n- [x] plan");
        assert_eq!(reloaded.checklist_progress(), (2, 2));
    }

    #[test]
    fn toggle_out_of_range_leaves_content() {
        let mut note = Note::new(RelativePathBuf::from("a.md"), "- [ ] one");
        let err = note.toggle_checkbox(3).unwrap_err();
        assert!(matches!(
            err,
            NoteError::Edit(EditError::InvalidIndex { index: 3, line_count: 1 })
        ));
        assert_eq!(note.content(), "- [ ] one");
    }

    #[test]
    fn load_missing_note() {
        let notes_dir = create_test_notes_dir();
        let result = Note::load(RelativePath::new("nope.md"), notes_dir.path());
        assert!(matches!(result, Err(NoteError::Io(IoError::NotFound(_)))));
    }

    #[test]
    fn progress_and_preview() {
        let note = Note::new(
            RelativePathBuf::from("a.md"),
            "\n- [x] *done*\n- [ ] todo\ntext",
        );
        assert_eq!(note.checklist_progress(), (1, 2));
        assert_eq!(note.preview().as_deref(), Some("done"));
    }
}

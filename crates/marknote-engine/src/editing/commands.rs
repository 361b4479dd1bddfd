use std::ops::Range;

use crate::parsing::{
    blocks::kinds::{Bullet, Checklist},
    lines::{line_at, line_count, line_start_before},
};

use super::EditError;

/// Markup the editor toolbar can insert around the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Heading of level 1 to 3; other levels are clamped.
    Heading(u8),
    Bold,
    Italic,
    Underline,
    Strike,
    Checklist,
    Bullet,
    Link,
}

impl Markup {
    /// Placeholder replaced by the selected text in wrapping snippets.
    pub const PLACEHOLDER: &'static str = "TEXT";

    pub fn snippet(self) -> &'static str {
        match self {
            Markup::Heading(level) => match level {
                0 | 1 => "# ",
                2 => "## ",
                _ => "### ",
            },
            Markup::Bold => "**TEXT**",
            Markup::Italic => "*TEXT*",
            Markup::Underline => "__TEXT__",
            Markup::Strike => "~~TEXT~~",
            Markup::Checklist => "- [ ] ",
            Markup::Bullet => "- ",
            Markup::Link => "[TEXT](url)",
        }
    }

    /// Whether a non-empty selection is wrapped rather than replaced.
    pub fn wraps(self) -> bool {
        matches!(
            self,
            Markup::Bold | Markup::Italic | Markup::Underline | Markup::Strike | Markup::Link
        )
    }
}

/// Edit commands. Offsets are byte offsets into the note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Flip the checklist marker on a line.
    ToggleCheckbox { line: usize },
    /// Enter key at `at`, continuing or ending checklists and bullets.
    InsertNewline { at: usize },
    /// Apply toolbar markup to the current selection.
    InsertMarkup { markup: Markup },
    InsertText { at: usize, text: String },
    Delete { range: Range<usize> },
}

/// A single replacement compiled from a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub insert: String,
    pub selection: Range<usize>,
}

impl Edit {
    fn insert_at(at: usize, insert: String) -> Self {
        let cursor = at + insert.len();
        Self {
            range: at..at,
            insert,
            selection: cursor..cursor,
        }
    }
}

/// Compiles a command against `text` and the current `selection`.
///
/// `Ok(None)` is a valid no-op (toggling a line with no marker).
pub fn compile_command(
    text: &str,
    selection: &Range<usize>,
    cmd: &Cmd,
) -> Result<Option<Edit>, EditError> {
    match cmd {
        Cmd::ToggleCheckbox { line } => compile_toggle(text, selection, *line),
        Cmd::InsertNewline { at } => {
            check_range(text, *at..*at)?;
            Ok(Some(compile_newline(text, *at)))
        }
        Cmd::InsertMarkup { markup } => {
            check_range(text, selection.clone())?;
            Ok(Some(compile_markup(text, selection.clone(), *markup)))
        }
        Cmd::InsertText { at, text: insert } => {
            check_range(text, *at..*at)?;
            Ok(Some(Edit::insert_at(*at, insert.clone())))
        }
        Cmd::Delete { range } => {
            check_range(text, range.clone())?;
            Ok(Some(Edit {
                range: range.clone(),
                insert: String::new(),
                selection: range.start..range.start,
            }))
        }
    }
}

fn compile_toggle(
    text: &str,
    selection: &Range<usize>,
    index: usize,
) -> Result<Option<Edit>, EditError> {
    let Some(line) = line_at(text, index) else {
        return Err(EditError::InvalidIndex {
            index,
            line_count: line_count(text),
        });
    };
    let Some((marker, replacement)) = Checklist::toggle_target(line.text) else {
        log::debug!("line {index} has no checklist marker; leaving it unchanged");
        return Ok(None);
    };
    Ok(Some(Edit {
        range: marker.offset(line.span.start).range(),
        insert: replacement.to_string(),
        // Markers are the same length, so the selection stays put.
        selection: selection.clone(),
    }))
}

fn compile_newline(text: &str, at: usize) -> Edit {
    let line_start = line_start_before(text, at);
    let current = &text[line_start..at];

    let continuation = if Checklist::parse(current).is_some() {
        // A bare `- [ ]` with no trailing space is not an empty item.
        let item = current[Checklist::CHECKED.len()..]
            .strip_prefix(' ')
            .unwrap_or(current);
        Some((item, "\n- [ ] "))
    } else {
        Bullet::parse(current).map(|item| (item, "\n- "))
    };

    match continuation {
        Some((item, _)) if item.trim().is_empty() => Edit {
            range: line_start..at,
            insert: "\n".to_string(),
            selection: line_start + 1..line_start + 1,
        },
        Some((_, prefix)) => Edit::insert_at(at, prefix.to_string()),
        None => Edit::insert_at(at, "\n".to_string()),
    }
}

fn compile_markup(text: &str, selection: Range<usize>, markup: Markup) -> Edit {
    let selected = &text[selection.clone()];
    let snippet = markup.snippet();

    let insert = if !selected.is_empty() && matches!(markup, Markup::Heading(_)) {
        format!("{snippet}{selected}")
    } else if !selected.is_empty() && markup.wraps() {
        snippet.replace(Markup::PLACEHOLDER, selected)
    } else {
        snippet.to_string()
    };

    let cursor = selection.start + insert.len();
    Edit {
        range: selection,
        insert,
        selection: cursor..cursor,
    }
}

fn check_range(text: &str, range: Range<usize>) -> Result<(), EditError> {
    if range.start > range.end
        || range.end > text.len()
        || !text.is_char_boundary(range.start)
        || !text.is_char_boundary(range.end)
    {
        return Err(EditError::InvalidRange {
            start: range.start,
            end: range.end,
            len: text.len(),
        });
    }
    Ok(())
}

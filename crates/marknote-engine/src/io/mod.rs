use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of notes on disk.
pub const NOTE_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Note not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Note path is not inside the notes directory: {0}")]
    OutsideNotesDir(PathBuf),
}

/// Read a note and return its content
pub fn read_note(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write a note's content, creating parent folders as needed
pub fn write_note(
    relative_path: &RelativePath,
    notes_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(notes_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    log::debug!(
        "writing {} bytes to {}",
        content.len(),
        absolute_path.display()
    );
    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Find every note under the notes directory, as sorted relative paths
pub fn scan_notes(notes_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;

    let mut notes = files
        .iter()
        .map(|path| relative_to_root(path, notes_root))
        .collect::<Result<Vec<_>, _>>()?;
    notes.sort();
    Ok(notes)
}

/// Express an absolute path inside the notes directory as a relative one
pub fn relative_to_root(path: &Path, notes_root: &Path) -> Result<RelativePathBuf, IoError> {
    let stripped = path
        .strip_prefix(notes_root)
        .map_err(|_| IoError::OutsideNotesDir(path.to_path_buf()))?;
    RelativePathBuf::from_path(stripped).map_err(|_| IoError::OutsideNotesDir(path.to_path_buf()))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext == NOTE_EXTENSION)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_scan_finds_notes_sorted() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "shopping.md", "- [ ] milk");
        create_test_file(&notes_dir, "ideas.md", "# Ideas");

        let notes = scan_notes(notes_dir.path()).unwrap();

        assert_eq!(
            notes,
            vec![
                RelativePathBuf::from("ideas.md"),
                RelativePathBuf::from("shopping.md")
            ]
        );
    }

    #[test]
    fn test_scan_nested_directories() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "root.md", "# Root");
        std::fs::create_dir(notes_dir.path().join("work")).unwrap();
        create_test_file(&notes_dir, "work/standup.md", "- [x] notes");

        let notes = scan_notes(notes_dir.path()).unwrap();

        assert_eq!(notes.len(), 2);
        assert!(notes.contains(&RelativePathBuf::from("work/standup.md")));
    }

    #[test]
    fn test_ignore_other_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "note.md", "text");
        create_test_file(&notes_dir, "photo.png", "fake image data");
        create_test_file(&notes_dir, "settings.json", "{}");

        let notes = scan_notes(notes_dir.path()).unwrap();

        assert_eq!(notes, vec![RelativePathBuf::from("note.md")]);
    }

    #[test]
    fn test_scan_invalid_directory() {
        let result = scan_notes(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_validate_notes_dir() {
        let notes_dir = create_test_notes_dir();
        assert!(validate_notes_dir(notes_dir.path()).is_ok());

        let file = create_test_file(&notes_dir, "a.md", "");
        assert!(validate_notes_dir(&file).is_err());
    }

    #[test]
    fn test_read_note_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_note(RelativePath::new("missing.md"), notes_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_then_read_preserves_bytes() {
        let notes_dir = create_test_notes_dir();
        let path = RelativePath::new("folder/sub/list.md");
        let content = "# List\r\n- [ ] one\n\n";

        write_note(path, notes_dir.path(), content).unwrap();

        assert_eq!(read_note(path, notes_dir.path()).unwrap(), content);
        assert!(notes_dir.path().join("folder").join("sub").is_dir());
    }

    #[test]
    fn test_relative_to_root_rejects_outside_paths() {
        let notes_dir = create_test_notes_dir();
        let result = relative_to_root(Path::new("/elsewhere/x.md"), notes_dir.path());
        assert!(matches!(result, Err(IoError::OutsideNotesDir(_))));
    }
}

use crate::editing::{Cmd, Document, EditError};

/// Flips the checklist marker on one line and returns the new note text.
///
/// A `- [x]` anywhere on the line becomes `- [ ]`; failing that, a `- [ ]`
/// becomes `- [x]`. Only the first occurrence changes and every other byte,
/// on this line and all others, is preserved. A line with no marker is left
/// as it is; that is not an error.
///
/// # Errors
/// [`EditError::InvalidIndex`] if `line_index` is not below the line count.
/// `text` always has at least one line, so index 0 is always valid.
pub fn toggle_checkbox(text: &str, line_index: usize) -> Result<String, EditError> {
    let mut doc = Document::from_text(text);
    doc.apply(Cmd::ToggleCheckbox { line: line_index })?;
    Ok(doc.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn checks_an_item() {
        assert_eq!(toggle_checkbox("- [ ] buy milk", 0).unwrap(), "- [x] buy milk");
    }

    #[test]
    fn unchecks_an_item() {
        assert_eq!(toggle_checkbox("- [x] buy milk", 0).unwrap(), "- [ ] buy milk");
    }

    #[test]
    fn plain_line_is_unchanged() {
        assert_eq!(toggle_checkbox("plain text", 0).unwrap(), "plain text");
    }

    #[test]
    fn empty_text_has_line_zero() {
        assert_eq!(toggle_checkbox("", 0).unwrap(), "");
        assert!(toggle_checkbox("", 1).is_err());
    }

    #[rstest]
    #[case("- [ ] a", 1, 1)]
    #[case("a\nb\n", 3, 3)]
    #[case("a\nb", usize::MAX, 2)]
    fn out_of_range_index(#[case] text: &str, #[case] index: usize, #[case] line_count: usize) {
        assert_eq!(
            toggle_checkbox(text, index),
            Err(EditError::InvalidIndex { index, line_count })
        );
    }

    #[test]
    fn other_lines_are_untouched() {
        let text = "# List\r\n- [ ] one\n- [x] two\n\n  trailing  ";
        let toggled = toggle_checkbox(text, 2).unwrap();
        assert_eq!(toggled, "# List\r\n- [ ] one\n- [ ] two\n\n  trailing  ");
    }

    #[test]
    fn double_toggle_restores_original() {
        let text = "- [ ] a\n- [x] b\nc";
        for line in 0..3 {
            let once = toggle_checkbox(text, line).unwrap();
            let twice = toggle_checkbox(&once, line).unwrap();
            assert_eq!(twice, text);
        }
    }

    #[test]
    fn single_toggle_is_not_idempotent() {
        let once = toggle_checkbox("- [ ] a", 0).unwrap();
        let twice = toggle_checkbox(&once, 0).unwrap();
        assert_ne!(once, "- [ ] a");
        assert_ne!(once, twice);
    }

    #[test]
    fn marker_mid_line_is_toggled() {
        assert_eq!(
            toggle_checkbox("todo: - [ ] later", 0).unwrap(),
            "todo: - [x] later"
        );
    }

    #[test]
    fn only_first_marker_changes() {
        assert_eq!(
            toggle_checkbox("- [ ] a - [ ] b", 0).unwrap(),
            "- [x] a - [ ] b"
        );
    }
}

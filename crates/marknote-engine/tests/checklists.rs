use marknote_engine::{BlockNode, EditError, checklist_lines, render, toggle_checkbox};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn toggle_checks_item() {
    assert_eq!(toggle_checkbox("- [ ] buy milk", 0).unwrap(), "- [x] buy milk");
}

#[test]
fn toggle_without_marker_is_noop() {
    assert_eq!(toggle_checkbox("plain text", 0).unwrap(), "plain text");
}

#[rstest]
#[case("- [ ] one", 0)]
#[case("# List\n- [x] done\n- [ ] todo", 1)]
#[case("# List\n- [x] done\n- [ ] todo", 2)]
#[case("a\r\n- [ ] crlf\r\nb", 1)]
#[case("- [ ] trailing\n", 0)]
fn toggle_twice_restores(#[case] note: &str, #[case] line: usize) {
    let once = toggle_checkbox(note, line).unwrap();
    assert_ne!(once, note);
    assert_eq!(toggle_checkbox(&once, line).unwrap(), note);
}

#[test]
fn toggle_only_touches_target_line() {
    let note = "- [ ] a\n- [ ] b\n- [ ] c";
    assert_eq!(toggle_checkbox(note, 1).unwrap(), "- [ ] a\n- [x] b\n- [ ] c");
}

#[test]
fn toggle_out_of_range() {
    assert_eq!(
        toggle_checkbox("one\ntwo", 2),
        Err(EditError::InvalidIndex {
            index: 2,
            line_count: 2
        })
    );
}

#[test]
fn rendered_state_follows_toggle() {
    let note = "# Chores\n- [ ] dishes\n- [x] laundry";
    let lines: Vec<_> = checklist_lines(&render(note)).collect();
    assert_eq!(lines, vec![1, 2]);

    let mut current = note.to_string();
    for line in lines {
        current = toggle_checkbox(&current, line).unwrap();
    }

    let states: Vec<_> = render(&current)
        .into_iter()
        .filter_map(|block| match block {
            BlockNode::ChecklistItem { checked, .. } => Some(checked),
            _ => None,
        })
        .collect();
    assert_eq!(states, vec![true, false]);
}

pub mod blocks;
pub mod inline;
pub mod lines;

pub use blocks::BlockNode;
pub use inline::{InlineSpan, format};

use blocks::{NoteLineClassifier, build_block};
use lines::lines_with_spans;

/// Renders note text into one [`BlockNode`] per line.
///
/// Total and pure: any input renders, malformed markup degrades to a
/// paragraph, and the same text always yields the same nodes. The empty
/// string is a single blank line.
pub fn render(text: &str) -> Vec<BlockNode> {
    let classifier = NoteLineClassifier;
    lines_with_spans(text)
        .map(|lr| build_block(classifier.classify(lr.text)))
        .collect()
}

/// Renders a single line. `line` must not contain `\n`.
pub fn render_line(line: &str) -> BlockNode {
    build_block(NoteLineClassifier.classify(line))
}

/// Line indices of every checklist item in rendered output.
pub fn checklist_lines(blocks: &[BlockNode]) -> impl Iterator<Item = usize> + '_ {
    blocks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_checklist_item())
        .map(|(i, _)| i)
}

pub mod span;

pub use span::Span;

/// A reference to a single line of the note with its index and byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 0-based line index. Stable for a given text snapshot.
    pub index: usize,
    /// Byte span of this line, excluding the `\n` terminator.
    pub span: Span,
    /// The line text, excluding the `\n` terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text` with their byte spans.
///
/// Lines are split on `\n` only, so `"a\n"` has two lines (`"a"` and `""`)
/// and the empty string has exactly one empty line. Any `\r` stays in the
/// line text.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    let mut offset = 0usize;
    text.split('\n').enumerate().map(move |(index, line)| {
        let start = offset;
        offset += line.len() + 1;
        LineRef {
            index,
            span: Span {
                start,
                end: start + line.len(),
            },
            text: line,
        }
    })
}

/// Number of lines `text` splits into. Never zero.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Looks up a single line by index.
pub fn line_at(text: &str, index: usize) -> Option<LineRef<'_>> {
    lines_with_spans(text).nth(index)
}

/// Byte offset where the line containing `at` begins.
pub fn line_start_before(text: &str, at: usize) -> usize {
    text[..at].rfind('\n').map_or(0, |nl| nl + 1)
}

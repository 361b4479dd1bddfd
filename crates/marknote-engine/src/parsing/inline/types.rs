/// A leaf-level inline fragment of a rendered line.
///
/// Spans never nest: the interior of a styled span is plain text, and the
/// interior of a code span is never scanned for other markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InlineSpan {
    /// Text outside any recognized construct.
    Text(String),
    /// `**text**`
    Bold(String),
    /// `*text*`
    Italic(String),
    /// `__text__`
    Underline(String),
    /// `~~text~~`
    Strike(String),
    /// `` `code` ``, verbatim.
    Code(String),
    /// `[text](url)`. Presentation layers open these in a new context.
    Link { text: String, url: String },
}

impl InlineSpan {
    /// The text a reader sees for this span, without delimiters.
    pub fn visible_text(&self) -> &str {
        match self {
            InlineSpan::Text(s)
            | InlineSpan::Bold(s)
            | InlineSpan::Italic(s)
            | InlineSpan::Underline(s)
            | InlineSpan::Strike(s)
            | InlineSpan::Code(s) => s,
            InlineSpan::Link { text, .. } => text,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InlineSpan::Text(_))
    }
}

/// Concatenates the visible text of a run of spans.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::visible_text).collect()
}

use crate::parsing::inline::types::InlineSpan;

/// The four wrapping styles, each owning its delimiter.
///
/// A wrapper matches when its delimiter is followed by a non-empty run that
/// does not contain the marker byte, then the delimiter again, so
/// `**a*b**` is never bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Underline,
    Strike,
}

impl Emphasis {
    /// Order of the formatting passes; each pass covers the whole segment.
    pub const PRIORITY: [Emphasis; 4] = [
        Emphasis::Bold,
        Emphasis::Italic,
        Emphasis::Underline,
        Emphasis::Strike,
    ];

    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Emphasis::Bold => b"**",
            Emphasis::Italic => b"*",
            Emphasis::Underline => b"__",
            Emphasis::Strike => b"~~",
        }
    }

    /// The byte that may not appear inside the wrapped text.
    pub fn marker(self) -> u8 {
        self.delimiter()[0]
    }

    pub fn span(self, inner: &str) -> InlineSpan {
        let inner = inner.to_string();
        match self {
            Emphasis::Bold => InlineSpan::Bold(inner),
            Emphasis::Italic => InlineSpan::Italic(inner),
            Emphasis::Underline => InlineSpan::Underline(inner),
            Emphasis::Strike => InlineSpan::Strike(inner),
        }
    }
}

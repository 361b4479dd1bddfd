/// A byte range `[start, end)` into the note text.
///
/// Lines and markers are addressed by span rather than copied, so an edit
/// can replace exactly the bytes it owns and leave everything else alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Shifts a span local to some line into document coordinates.
    #[must_use]
    pub fn offset(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }

    #[must_use]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        // inverted spans never underflow
        assert_eq!(Span::new(5, 1).len(), 0);
    }

    #[test]
    fn offset_moves_both_ends() {
        assert_eq!(Span::new(0, 5).offset(10), Span::new(10, 15));
        assert_eq!(Span::new(3, 4).offset(10).range(), 13..14);
    }
}

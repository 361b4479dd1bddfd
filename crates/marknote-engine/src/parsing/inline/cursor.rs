/// A cursor for byte-by-byte inline scanning.
///
/// All inline delimiters are ASCII, so every position the scanner stops at to
/// slice text is on a char boundary even when the segment holds multi-byte
/// characters.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The segment being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `stop` or end of input; returns how many bytes were skipped.
    pub fn eat_until(&mut self, stop: u8) -> usize {
        let start = self.i;
        while let Some(b) = self.peek() {
            if b == stop {
                break;
            }
            self.i += 1;
        }
        self.i - start
    }

    /// Text between `from` and the current position.
    pub fn slice_from(&self, from: usize) -> &'a str {
        &self.s[from..self.i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("*a");
        assert!(!cur.starts_with(b"*a*"));
        cur.bump();
        assert!(cur.starts_with(b"a"));
        assert!(!cur.starts_with(b"ab"));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn eat_until_stops_at_delimiter() {
        let mut cur = Cursor::new("abc*def");
        assert_eq!(cur.eat_until(b'*'), 3);
        assert_eq!(cur.peek(), Some(b'*'));
        assert_eq!(cur.slice_from(0), "abc");
    }

    #[test]
    fn eat_until_runs_to_eof() {
        let mut cur = Cursor::new("héllo");
        let n = cur.eat_until(b'`');
        assert_eq!(n, "héllo".len());
        assert!(cur.eof());
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }
}

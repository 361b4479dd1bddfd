/// Blockquote with owned prefix. One level only; `>>` is not nesting.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    pub fn parse(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}

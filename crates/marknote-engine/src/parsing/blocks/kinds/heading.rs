/// ATX-style heading with owned prefixes. Only levels 1 to 3 exist.
pub struct Heading;

impl Heading {
    /// Prefixes in match order, with the level each one opens.
    pub const PREFIXES: [(&'static str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];

    /// Returns the level and the text after the prefix.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|&(prefix, level)| line.strip_prefix(prefix).map(|rest| (level, rest)))
    }
}

/// Single-line code fence: the whole line opens and closes with backticks.
///
/// Fences never span lines here; a line holding only the opener is still a
/// complete (empty) code block.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the verbatim interior of a fenced line.
    pub fn parse(line: &str) -> Option<&str> {
        if !line.starts_with(Self::BACKTICKS) || !line.ends_with(Self::BACKTICKS) {
            return None;
        }
        let fence = Self::BACKTICKS.len();
        Some(line.get(fence..line.len().saturating_sub(fence)).unwrap_or(""))
    }
}

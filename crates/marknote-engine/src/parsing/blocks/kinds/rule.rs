/// Thematic break.
pub struct Rule;

impl Rule {
    pub const MARKERS: [&'static str; 2] = ["---", "***"];

    pub fn matches(line: &str) -> bool {
        Self::MARKERS.contains(&line.trim())
    }
}

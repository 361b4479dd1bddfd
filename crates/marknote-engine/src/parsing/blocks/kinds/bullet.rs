/// Bullet item with owned prefix.
pub struct Bullet;

impl Bullet {
    pub const PREFIX: &'static str = "- ";

    /// A `- ` line that holds any `[` is left for other rules, so a
    /// malformed checklist never renders as a bullet.
    pub fn parse(line: &str) -> Option<&str> {
        if line.contains('[') {
            return None;
        }
        line.strip_prefix(Self::PREFIX)
    }
}

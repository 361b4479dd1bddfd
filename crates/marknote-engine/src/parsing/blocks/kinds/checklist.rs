use crate::parsing::lines::Span;

/// Checklist item with owned marker constants.
///
/// Both the renderer and the checkbox mutator read the markers from here.
pub struct Checklist;

impl Checklist {
    pub const CHECKED: &'static str = "- [x]";
    pub const UNCHECKED: &'static str = "- [ ]";

    /// Parses a line that opens with a checklist marker.
    ///
    /// Returns whether the item is checked and the item text, which starts
    /// after the marker and one following space if there is one.
    pub fn parse(line: &str) -> Option<(bool, &str)> {
        let (checked, rest) = if let Some(rest) = line.strip_prefix(Self::CHECKED) {
            (true, rest)
        } else {
            (false, line.strip_prefix(Self::UNCHECKED)?)
        };
        Some((checked, rest.strip_prefix(' ').unwrap_or(rest)))
    }

    /// Finds the marker a toggle should rewrite and its replacement.
    ///
    /// A checked marker anywhere in the line wins over an unchecked one;
    /// only the first occurrence is touched. `None` means the line carries
    /// no marker at all.
    pub fn toggle_target(line: &str) -> Option<(Span, &'static str)> {
        let (marker, replacement) = if line.contains(Self::CHECKED) {
            (Self::CHECKED, Self::UNCHECKED)
        } else if line.contains(Self::UNCHECKED) {
            (Self::UNCHECKED, Self::CHECKED)
        } else {
            return None;
        };
        let start = line.find(marker)?;
        Some((Span::new(start, start + marker.len()), replacement))
    }
}

use crate::parsing::inline::{
    has_code_span,
    kinds::{Image, ImageMatch, Link, LinkMatch},
};

use super::kinds::{BlockQuote, Bullet, Checklist, CodeFence, Heading, Rule};

/// Classification of a single line, carrying the slices each kind renders.
///
/// Phase 1 of rendering: every line is classified on its own, without
/// reference to its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Heading { level: u8, text: &'a str },
    Checklist { checked: bool, text: &'a str },
    Links { line: &'a str, links: Vec<LinkMatch<'a>> },
    Image(ImageMatch<'a>),
    CodeFence { code: &'a str },
    InlineCode { line: &'a str },
    Bullet { text: &'a str },
    Quote { text: &'a str },
    Rule,
    Paragraph { line: &'a str },
    Blank,
}

/// Classifies individual lines by ordered precedence.
///
/// The order is the contract: a line matching several rules takes the
/// first. `# [a](b)` is a heading, `- [ ] see [a](b)` is a checklist item,
/// ```` ```a`b`c``` ```` is a code fence.
pub struct NoteLineClassifier;

impl NoteLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some((checked, text)) = Checklist::parse(line) {
            return LineClass::Checklist { checked, text };
        }
        let links = Link::find_all(line);
        if !links.is_empty() {
            return LineClass::Links { line, links };
        }
        if let Some(image) = Image::find_first(line) {
            return LineClass::Image(image);
        }
        if let Some(code) = CodeFence::parse(line) {
            return LineClass::CodeFence { code };
        }
        if has_code_span(line) {
            return LineClass::InlineCode { line };
        }
        if let Some(text) = Bullet::parse(line) {
            return LineClass::Bullet { text };
        }
        if let Some(text) = BlockQuote::parse(line) {
            return LineClass::Quote { text };
        }
        if Rule::matches(line) {
            return LineClass::Rule;
        }
        if !line.trim().is_empty() {
            return LineClass::Paragraph { line };
        }
        LineClass::Blank
    }
}

use crate::parsing::inline::{InlineSpan, format, format_with_code, kinds::LinkMatch};

use super::{classify::LineClass, types::BlockNode};

/// Phase 2 of rendering: turns a classified line into its node.
///
/// Only inline-code lines split out code spans; every other text-bearing
/// kind formats its text with emphasis alone, so a backtick there is literal.
pub fn build_block(class: LineClass<'_>) -> BlockNode {
    match class {
        LineClass::Heading { level, text } => BlockNode::Heading {
            level,
            spans: format(text),
        },
        LineClass::Checklist { checked, text } => BlockNode::ChecklistItem {
            checked,
            spans: format(text),
        },
        LineClass::Links { line, links } => BlockNode::LinkLine {
            spans: link_line_spans(line, &links),
        },
        LineClass::Image(image) => BlockNode::ImageLine {
            alt: image.alt.to_string(),
            src: image.src.to_string(),
        },
        LineClass::CodeFence { code } => BlockNode::CodeBlock {
            code: code.to_string(),
        },
        LineClass::InlineCode { line } => BlockNode::InlineCodeLine {
            spans: format_with_code(line),
        },
        LineClass::Bullet { text } => BlockNode::BulletItem {
            spans: format(text),
        },
        LineClass::Quote { text } => BlockNode::Quote {
            spans: format(text),
        },
        LineClass::Rule => BlockNode::Rule,
        LineClass::Paragraph { line } => BlockNode::Paragraph {
            spans: format(line),
        },
        LineClass::Blank => BlockNode::Blank,
    }
}

/// Segments a line around its links; the text between links is formatted.
fn link_line_spans(line: &str, links: &[LinkMatch<'_>]) -> Vec<InlineSpan> {
    let mut out = vec![];
    let mut text_start = 0;

    for link in links {
        out.extend(format(&line[text_start..link.span.start]));
        out.push(InlineSpan::Link {
            text: link.text.to_string(),
            url: link.url.to_string(),
        });
        text_start = link.span.end;
    }

    out.extend(format(&line[text_start..]));
    out
}

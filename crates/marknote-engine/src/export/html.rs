use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{BlockNode, InlineSpan};

/// Renders nodes to an HTML fragment, one element per line.
///
/// Checklist rows carry `data-line` with their line index so a page can
/// route a click back to the checkbox mutator. Links open in a new context
/// without a referrer. All text and attribute values are escaped.
pub fn to_html(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for (line, block) in blocks.iter().enumerate() {
        write_block(&mut out, line, block);
        out.push('\n');
    }
    out
}

fn write_block(out: &mut String, line: usize, block: &BlockNode) {
    match block {
        BlockNode::Heading { level, spans } => {
            let _ = write!(out, "<h{level}>");
            write_spans(out, spans);
            let _ = write!(out, "</h{level}>");
        }
        BlockNode::ChecklistItem { checked, spans } => {
            let (class, checked_attr) = if *checked {
                ("checklist-item checked", " checked")
            } else {
                ("checklist-item", "")
            };
            let _ = write!(
                out,
                r#"<div class="{class}" data-line="{line}"><input type="checkbox"{checked_attr}><span>"#
            );
            write_spans(out, spans);
            out.push_str("</span></div>");
        }
        BlockNode::BulletItem { spans } => {
            out.push_str(r#"<div class="bullet-item">"#);
            write_spans(out, spans);
            out.push_str("</div>");
        }
        BlockNode::LinkLine { spans }
        | BlockNode::InlineCodeLine { spans }
        | BlockNode::Paragraph { spans } => {
            out.push_str("<p>");
            write_spans(out, spans);
            out.push_str("</p>");
        }
        BlockNode::ImageLine { alt, src } => {
            let _ = write!(
                out,
                r#"<figure><img src="{}" alt="{}">"#,
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(alt)
            );
            if !alt.is_empty() {
                let _ = write!(out, "<figcaption>{}</figcaption>", encode_text(alt));
            }
            out.push_str("</figure>");
        }
        BlockNode::CodeBlock { code } => {
            let _ = write!(out, "<pre><code>{}</code></pre>", encode_text(code));
        }
        BlockNode::Quote { spans } => {
            out.push_str("<blockquote>");
            write_spans(out, spans);
            out.push_str("</blockquote>");
        }
        BlockNode::Rule => out.push_str("<hr>"),
        BlockNode::Blank => out.push_str(r#"<div class="spacer"></div>"#),
    }
}

fn write_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        let _ = match span {
            InlineSpan::Text(t) => write!(out, "{}", encode_text(t)),
            InlineSpan::Bold(t) => write!(out, "<strong>{}</strong>", encode_text(t)),
            InlineSpan::Italic(t) => write!(out, "<em>{}</em>", encode_text(t)),
            InlineSpan::Underline(t) => write!(out, "<u>{}</u>", encode_text(t)),
            InlineSpan::Strike(t) => write!(out, "<del>{}</del>", encode_text(t)),
            InlineSpan::Code(t) => write!(out, "<code>{}</code>", encode_text(t)),
            InlineSpan::Link { text, url } => write!(
                out,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                encode_double_quoted_attribute(url),
                encode_text(text)
            ),
        };
    }
}

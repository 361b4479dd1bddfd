use marknote_config::DisplayConfig;
use marknote_engine::{BlockNode, InlineSpan};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Draws one rendered block as a single terminal line
pub fn block_line(line_index: usize, block: &BlockNode, display: &DisplayConfig) -> Line<'static> {
    let mut spans = Vec::new();
    if display.show_line_numbers {
        spans.push(Span::styled(
            format!("{line_index:>4} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    match block {
        BlockNode::Heading { level, spans: inline } => {
            let style = heading_style(*level);
            spans.push(Span::styled(format!("{} ", "#".repeat(*level as usize)), style));
            spans.extend(inline_spans(inline, style));
        }
        BlockNode::ChecklistItem {
            checked,
            spans: inline,
        } => {
            let (marker, base) = if *checked {
                let base = if display.dim_checked {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                ("[x] ", base)
            } else {
                ("[ ] ", Style::default())
            };
            spans.push(Span::styled(marker, Style::default().fg(Color::Green)));
            spans.extend(inline_spans(inline, base));
        }
        BlockNode::BulletItem { spans: inline } => {
            spans.push(Span::raw("• "));
            spans.extend(inline_spans(inline, Style::default()));
        }
        BlockNode::LinkLine { spans: inline }
        | BlockNode::InlineCodeLine { spans: inline }
        | BlockNode::Paragraph { spans: inline } => {
            spans.extend(inline_spans(inline, Style::default()));
        }
        BlockNode::ImageLine { alt, src } => {
            let label = if alt.is_empty() { src } else { alt };
            spans.push(Span::styled(
                format!("[image: {label}]"),
                Style::default().fg(Color::Magenta),
            ));
        }
        BlockNode::CodeBlock { code } => {
            spans.push(Span::styled(
                code.clone(),
                Style::default().fg(Color::Yellow).bg(Color::Black),
            ));
        }
        BlockNode::Quote { spans: inline } => {
            spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
            spans.extend(inline_spans(
                inline,
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }
        BlockNode::Rule => spans.push(Span::styled(
            "─".repeat(40),
            Style::default().fg(Color::DarkGray),
        )),
        BlockNode::Blank => {}
    }

    Line::from(spans)
}

fn heading_style(level: u8) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match level {
        1 => style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        2 => style.fg(Color::Cyan),
        _ => style,
    }
}

fn inline_spans(inline: &[InlineSpan], base: Style) -> impl Iterator<Item = Span<'static>> + '_ {
    inline.iter().map(move |span| match span {
        InlineSpan::Text(t) => Span::styled(t.clone(), base),
        InlineSpan::Bold(t) => Span::styled(t.clone(), base.add_modifier(Modifier::BOLD)),
        InlineSpan::Italic(t) => Span::styled(t.clone(), base.add_modifier(Modifier::ITALIC)),
        InlineSpan::Underline(t) => {
            Span::styled(t.clone(), base.add_modifier(Modifier::UNDERLINED))
        }
        InlineSpan::Strike(t) => Span::styled(t.clone(), base.add_modifier(Modifier::CROSSED_OUT)),
        InlineSpan::Code(t) => Span::styled(t.clone(), base.fg(Color::Yellow)),
        InlineSpan::Link { text, url } => Span::styled(
            format!("{text} <{url}>"),
            base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        ),
    })
}

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis},
    types::InlineSpan,
};

/// Formats a text segment into a sequence of [`InlineSpan`]s.
///
/// One pass per wrapper, in [`Emphasis::PRIORITY`] order, each over the
/// whole segment: every bold is resolved before any italic is looked for,
/// so a stray `*` early in the line cannot swallow a later `**bold**`. Later
/// passes only scan the text left between earlier matches; a styled span's
/// interior is emitted as-is and never scanned again. Bytes that open
/// nothing accumulate into `Text`.
///
/// Callers must not pass code-run text here; see [`format_with_code`].
///
/// # Returns
/// An empty vector for an empty segment, otherwise spans whose delimited
/// text concatenates back to the input.
pub fn format(s: &str) -> Vec<InlineSpan> {
    let mut runs = vec![EmphasisRun::Text(s)];
    for style in Emphasis::PRIORITY {
        runs = runs
            .into_iter()
            .flat_map(|run| match run {
                EmphasisRun::Text(t) => split_style(t, style),
                styled => vec![styled],
            })
            .collect();
    }

    let mut out = vec![];
    for run in runs {
        match run {
            EmphasisRun::Text(t) => flush_text(&mut out, t),
            EmphasisRun::Styled(span) => out.push(span),
        }
    }
    out
}

/// Intermediate result of the emphasis passes.
enum EmphasisRun<'a> {
    /// Not yet matched by any pass so far.
    Text(&'a str),
    Styled(InlineSpan),
}

/// Splits `s` around every closed `style` wrapper, left to right.
fn split_style(s: &str, style: Emphasis) -> Vec<EmphasisRun<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some(span) = try_parse_wrapped(&mut cur, style) {
            if start > text_start {
                out.push(EmphasisRun::Text(&s[text_start..start]));
            }
            out.push(EmphasisRun::Styled(span));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if s.len() > text_start {
        out.push(EmphasisRun::Text(&s[text_start..]));
    }
    out
}

/// A run of a line split around closed code spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRun<'a> {
    Text(&'a str),
    /// Interior of a code span, without the backticks.
    Code(&'a str),
}

/// Splits `s` into alternating text and code runs.
///
/// A code span is a backtick, one or more non-backtick bytes, and a closing
/// backtick. Unclosed or empty pairs stay in the surrounding text run.
pub fn split_code_runs(s: &str) -> Vec<CodeRun<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some(inner) = try_parse_code_span(&mut cur) {
            if start > text_start {
                out.push(CodeRun::Text(&s[text_start..start]));
            }
            out.push(CodeRun::Code(inner));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if s.len() > text_start {
        out.push(CodeRun::Text(&s[text_start..]));
    }
    out
}

/// True when `s` holds at least one closed code span.
pub fn has_code_span(s: &str) -> bool {
    split_code_runs(s)
        .iter()
        .any(|run| matches!(run, CodeRun::Code(_)))
}

/// Formats `s` with code spans taking precedence over every other wrapper.
///
/// Text runs go through [`format`]; code runs become verbatim
/// [`InlineSpan::Code`] and are never re-scanned.
pub fn format_with_code(s: &str) -> Vec<InlineSpan> {
    split_code_runs(s)
        .into_iter()
        .flat_map(|run| match run {
            CodeRun::Text(t) => format(t),
            CodeRun::Code(c) => vec![InlineSpan::Code(c.to_string())],
        })
        .collect()
}

fn flush_text(out: &mut Vec<InlineSpan>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(InlineSpan::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(InlineSpan::Text(text.to_string()));
    }
}

/// Attempts to parse one wrapper at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_wrapped(cur: &mut Cursor<'_>, style: Emphasis) -> Option<InlineSpan> {
    let delim = style.delimiter();
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();
    let inner_len = cur.eat_until(style.marker());

    if inner_len == 0 || !cur.starts_with(delim) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump_n(delim.len());

    Some(style.span(inner))
}

/// Attempts to parse a code span, returning its interior.
///
/// On failure, cursor position is restored.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    let inner_len = cur.eat_until(CodeSpan::TICK);

    if inner_len == 0 || cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump(); // closing `

    Some(inner)
}

use crate::parsing::inline::InlineSpan;

/// One rendered line of a note.
///
/// A note renders to exactly one `BlockNode` per source line, so a node's
/// position in the rendered sequence is its line index. Presentation layers
/// pass that index back to the checkbox mutator when a checklist item is
/// activated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockNode {
    /// `# `, `## ` or `### ` heading.
    Heading { level: u8, spans: Vec<InlineSpan> },
    /// `- [ ]` or `- [x]` item.
    ChecklistItem {
        checked: bool,
        spans: Vec<InlineSpan>,
    },
    /// `- ` item.
    BulletItem { spans: Vec<InlineSpan> },
    /// A line holding one or more `[text](url)` links.
    LinkLine { spans: Vec<InlineSpan> },
    /// A line holding `![alt](src)`; only the first image is kept.
    ImageLine { alt: String, src: String },
    /// A single-line ```` ```code``` ```` fence, interior verbatim.
    CodeBlock { code: String },
    /// A line with at least one `` `code` `` span.
    InlineCodeLine { spans: Vec<InlineSpan> },
    /// `> ` quote.
    Quote { spans: Vec<InlineSpan> },
    /// `---` or `***`.
    Rule,
    /// Any other non-blank line.
    Paragraph { spans: Vec<InlineSpan> },
    /// Vertical spacing for an empty or whitespace-only line.
    Blank,
}

impl BlockNode {
    /// The inline spans of text-bearing nodes; empty for the rest.
    pub fn spans(&self) -> &[InlineSpan] {
        match self {
            BlockNode::Heading { spans, .. }
            | BlockNode::ChecklistItem { spans, .. }
            | BlockNode::BulletItem { spans }
            | BlockNode::LinkLine { spans }
            | BlockNode::InlineCodeLine { spans }
            | BlockNode::Quote { spans }
            | BlockNode::Paragraph { spans } => spans,
            BlockNode::ImageLine { .. }
            | BlockNode::CodeBlock { .. }
            | BlockNode::Rule
            | BlockNode::Blank => &[],
        }
    }

    /// Short lowercase name of the node kind, for display and bindings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BlockNode::Heading { .. } => "heading",
            BlockNode::ChecklistItem { .. } => "checklist_item",
            BlockNode::BulletItem { .. } => "bullet_item",
            BlockNode::LinkLine { .. } => "link_line",
            BlockNode::ImageLine { .. } => "image_line",
            BlockNode::CodeBlock { .. } => "code_block",
            BlockNode::InlineCodeLine { .. } => "inline_code_line",
            BlockNode::Quote { .. } => "quote",
            BlockNode::Rule => "rule",
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::Blank => "blank",
        }
    }

    pub fn is_checklist_item(&self) -> bool {
        matches!(self, BlockNode::ChecklistItem { .. })
    }
}
